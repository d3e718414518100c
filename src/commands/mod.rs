pub mod refactor;

pub type CmdResult<T> = rewire::Result<T>;
