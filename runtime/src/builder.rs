use crate::{error::DslError, message::Message};

/// A single-use staging area for a message value.
///
/// A builder starts out holding either the zero value ([Builder::new]) or a
/// deep copy of an existing message ([Builder::from_message]). Accessors may be
/// called any number of times until [Builder::finalize] moves the value out;
/// after that the builder is spent and every accessor fails fast.
#[derive(Debug)]
pub struct Builder<M: Message> {
    message: Option<M>,
}

impl<M: Message> Builder<M> {
    pub fn new() -> Self {
        Builder { message: Some(M::default()) }
    }

    /// Seeds a builder with a copy of `message`. The copy owns all of its
    /// storage, so nothing done through the builder is visible in `message`.
    pub fn from_message(message: &M) -> Self {
        Builder { message: Some(message.clone()) }
    }

    pub fn is_finalized(&self) -> bool {
        self.message.is_none()
    }

    /// # Panics
    ///
    /// Panics if the builder was already finalized.
    pub fn message(&self) -> &M {
        match self.message.as_ref() {
            Some(message) => message,
            None => finalized::<M>(),
        }
    }

    /// # Panics
    ///
    /// Panics if the builder was already finalized.
    pub fn message_mut(&mut self) -> &mut M {
        match self.message.as_mut() {
            Some(message) => message,
            None => finalized::<M>(),
        }
    }

    pub fn try_message_mut(&mut self) -> Result<&mut M, DslError> {
        self.message
            .as_mut()
            .ok_or(DslError::Finalized { message: M::NAME })
    }

    /// Seals the accumulated state into an immutable value.
    ///
    /// # Panics
    ///
    /// Panics if the builder was already finalized.
    pub fn finalize(&mut self) -> M {
        match self.message.take() {
            Some(message) => message,
            None => finalized::<M>(),
        }
    }

    pub fn try_finalize(&mut self) -> Result<M, DslError> {
        self.message
            .take()
            .ok_or(DslError::Finalized { message: M::NAME })
    }
}

impl<M: Message> Default for Builder<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cold]
#[track_caller]
fn finalized<M: Message>() -> ! {
    panic!("{}", DslError::Finalized { message: M::NAME })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Case {
        name:  String,
        count: u32,
    }

    impl Message for Case {
        const NAME: &'static str = "Case";
    }

    #[test]
    fn test_new_builder_holds_zero_value() {
        let mut builder = Builder::<Case>::new();
        assert!(!builder.is_finalized());
        assert_eq!(builder.finalize(), Case::default());
        assert!(builder.is_finalized());
    }

    #[test]
    fn test_last_write_wins() {
        let mut builder = Builder::<Case>::new();
        builder.message_mut().name = "a".into();
        builder.message_mut().name = "b".into();
        assert_eq!(builder.finalize().name, "b");
    }

    #[test]
    fn test_from_message_does_not_alias_source() {
        let source = Case { name: "login".into(), count: 1 };
        let mut builder = Builder::from_message(&source);
        builder.message_mut().count = 7;
        let copy = builder.finalize();

        assert_eq!(copy.count, 7);
        assert_eq!(source.count, 1);
        assert_eq!(copy.name, source.name);
    }

    #[test]
    fn test_try_finalize_twice_errors() {
        let mut builder = Builder::<Case>::new();
        assert!(builder.try_finalize().is_ok());
        assert_eq!(
            builder.try_finalize().unwrap_err(),
            DslError::Finalized { message: "Case" }
        );
        assert!(builder.try_message_mut().is_err());
    }

    #[test]
    #[should_panic(expected = "already finalized")]
    fn test_finalize_twice_panics() {
        let mut builder = Builder::<Case>::new();
        builder.finalize();
        builder.finalize();
    }

    #[test]
    #[should_panic(expected = "Builder for Case was already finalized")]
    fn test_mutation_after_finalize_panics() {
        let mut builder = Builder::<Case>::new();
        builder.finalize();
        builder.message_mut().count = 3;
    }
}
