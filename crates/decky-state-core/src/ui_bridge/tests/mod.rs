
#[cfg(test)]
mod tests {
    use crate::ui_bridge::UiBridgeError;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            UiBridgeError::NoActiveScope.to_string(),
            "use_decky_state needs a parent StateContextProvider"
        );
        assert!(UiBridgeError::ScopeAlreadyActive.to_string().contains("already attached"));
    }
}
