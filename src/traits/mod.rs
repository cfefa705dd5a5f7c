pub mod updater;

pub use updater::TapeUpdater;
