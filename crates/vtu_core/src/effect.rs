/// Payload for one batch submission to the external result service.
///
/// `usns` is already normalized and deduplicated; `subject_code` is trimmed
/// and uppercased; the URLs pass through trimmed but otherwise verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRequest {
    pub usns: Vec<String>,
    pub subject_code: String,
    pub index_url: String,
    pub result_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the single outstanding request to the result service.
    SubmitBatch(ResultRequest),
    /// Abort the outstanding request, if any.
    AbortSubmit,
}
