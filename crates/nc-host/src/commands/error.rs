/// Centralized error mapping for commands.
///
/// Keeps the full context chain, `outer: inner: root`.
pub fn map_err(err: impl Into<anyhow::Error>) -> String {
    format!("{:#}", err.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn map_err_keeps_context_chain() {
        let err = Err::<(), _>(std::io::Error::other("disk full"))
            .context("save history")
            .unwrap_err();
        assert_eq!(map_err(err), "save history: disk full");
    }
}
