use gfm_core::HandleId;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! handle_type {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(HandleId);

        impl $name {
            pub fn new() -> Self {
                Self(HandleId::new())
            }

            pub fn from_id(id: HandleId) -> Self {
                Self(id)
            }

            pub fn id(&self) -> HandleId {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

handle_type!(MarkerHandle);
handle_type!(CircleHandle);
