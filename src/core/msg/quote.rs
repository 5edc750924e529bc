use serde::{Deserialize, Serialize};

use crate::domain::{fetch::FetchFailure, quote::QuoteResponse};

/// Messages driving the quote action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteMsg {
    /// The quote trigger was activated
    Load,
    /// The request finished with a 2xx JSON body
    Loaded(QuoteResponse),
    /// The request failed
    Failed(FetchFailure),
}

impl QuoteMsg {
    pub fn from_result<E: Into<FetchFailure>>(result: Result<QuoteResponse, E>) -> Self {
        match result {
            Ok(response) => QuoteMsg::Loaded(response),
            Err(e) => QuoteMsg::Failed(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;

    use super::*;

    #[test]
    fn test_from_result() {
        let msg = QuoteMsg::from_result::<FetchFailure>(Ok(QuoteResponse::default()));
        assert_eq!(msg, QuoteMsg::Loaded(QuoteResponse::default()));

        let msg = QuoteMsg::from_result(Err(FetchFailure::Status(500)));
        assert_eq!(msg, QuoteMsg::Failed(FetchFailure::Status(500)));
    }

    #[test]
    fn test_quote_msg_serde() -> Result<()> {
        let msg = QuoteMsg::Loaded(QuoteResponse {
            content: Some("X".into()),
            author: None,
        });
        let s = serde_json::to_string(&msg)?;
        let back: QuoteMsg = serde_json::from_str(&s)?;
        assert_eq!(msg, back);

        Ok(())
    }
}
