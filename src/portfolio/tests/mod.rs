pub(crate) mod fakes;
pub(crate) mod performance_tests;
pub(crate) mod pnl_tests;
