pub mod comparison;
pub mod factory;
pub mod link;
pub mod partition;
pub mod partitioned;
pub mod sequential;
pub mod worker;

pub use comparison::{ensure_agreement, run_all, UpdaterRun};
pub use factory::UpdaterFactory;
pub use link::Side;
pub use partition::{PartitionPlan, SectionBounds};
pub use partitioned::PartitionedUpdater;
pub use sequential::SequentialUpdater;
