use crate::fs::FileSystem;
use crate::logger::Logger;
use crate::op::Op;
use std::io;

/// One pipeline run: a fresh store plus the channel its outcomes are
/// narrated through.
pub struct Context<'a> {
    pub fs: FileSystem,
    pub log: &'a mut Logger,
}

impl<'a> Context<'a> {
    pub fn new(log: &'a mut Logger) -> Self {
        Self {
            fs: FileSystem::new(),
            log: log,
        }
    }

    pub fn apply(&mut self, op: &Op) -> io::Result<()> {
        crate::behavior::exec_step(self, op)
    }

    pub fn parse_apply(&mut self, args: Vec<String>) -> io::Result<()> {
        let pipeline = crate::op::parse_pipeline(args)?;
        for op in pipeline {
            self.apply(&op)?
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_apply_runs_in_order() -> io::Result<()> {
        let mut log = Logger::new_vec();
        let mut ctx = Context::new(&mut log);
        ctx.parse_apply(vec![
            "--mkdir".into(),
            "inbox".into(),
            "--touch".into(),
            "inbox".into(),
            "note.txt".into(),
        ])?;

        assert!(ctx.fs.contents("inbox").expect("exists").find("note.txt").is_some());
        Ok(())
    }

    #[test]
    fn parse_apply_rejects_bad_pipeline() {
        let mut log = Logger::new_vec();
        let mut ctx = Context::new(&mut log);
        let res = ctx.parse_apply(vec!["stray-arg".into()]);
        assert!(res.is_err());
    }
}
