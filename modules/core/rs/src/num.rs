use std::fmt::{Debug, Display};

/// T values are float numbers
pub trait Float: ::num::Float + Debug + Display + Default + Send + Sync + 'static {}

impl<T: ::num::Float + Debug + Display + Default + Send + Sync + 'static> Float for T {}
