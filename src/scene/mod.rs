pub(crate) mod captions;
pub(crate) mod registry;
pub(crate) mod router;
pub(crate) mod typewriter;
pub(crate) mod view;
