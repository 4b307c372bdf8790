
#[cfg(test)]
mod tests {
    use crate::event::ListenerRegistry;

    #[test]
    fn test_new_registry_is_empty() {
        let registry = ListenerRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.notify(), 0, "Notifying an empty registry delivers nothing");
    }
}
