pub use eventhub_core::repositories;

pub mod entities {
    pub use eventhub_core::entities::*;
    #[cfg(test)]
    pub use eventhub_entities::builders::*;
}

pub mod usecases {
    pub use eventhub_core::usecases::*;
}

pub mod prelude {
    pub use super::{
        entities::*,
        repositories::{Error as RepoError, *},
    };
}
