pub(crate) mod explainer;
pub(crate) mod resolve;
pub(crate) mod schedule;
pub(crate) mod setup;
pub(crate) mod table;
