/// Lifecycle of one backend request as seen by the UI.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotStarted,
    Pending,
    Ready(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}

impl<T> From<Result<T, String>> for FetchState<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_started() {
        let state: FetchState<u32> = FetchState::default();
        assert_eq!(state, FetchState::NotStarted);
        assert!(state.ready().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_from_result() {
        let ok: FetchState<u32> = Ok(7).into();
        assert_eq!(ok.ready(), Some(&7));
        assert!(ok.error().is_none());

        let failed: FetchState<u32> = Err("Request failed: 502".to_string()).into();
        assert_eq!(failed.error(), Some("Request failed: 502"));
        assert!(failed.ready().is_none());
    }
}
