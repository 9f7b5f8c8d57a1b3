pub mod builder;
pub mod constant;
pub mod context;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use fixtures::MockEndpoint;

pub mod prelude {
    pub use crate::{constant::*, MockEndpoint, TestBuilder, TestContext};
}
