use serde::Serialize;
use strum_macros::EnumIter;

#[derive(Debug, PartialEq)]
pub enum ParseError {
    MissingArg { oc: OpCode, name: &'static str },
    TooManyArgs { oc: OpCode, excess: usize },
    ArgBeforeFirstOp(String),
}
impl From<ParseError> for std::io::Error {
    fn from(pe: ParseError) -> Self {
        Self::other(match pe {
            ParseError::MissingArg { oc, name } => format!("Op {:?} missing arg {}", oc, name),
            ParseError::TooManyArgs { oc, excess } => {
                format!("Op {:?} given {} too many arguments", oc, excess)
            }
            ParseError::ArgBeforeFirstOp(arg) => {
                format!("Arg {:?} given before any operations", arg)
            }
        })
    }
}

#[derive(Debug, PartialEq, Clone, Copy, EnumIter)]
pub enum OpCode {
    Seed,
    Mkdir,
    Touch,
    Search,
    Rm,
    Mv,
    Drain,
    Tree,
    Ls,
    Rename,
    Cp,
    Sort,
    Undo,
    Dump,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub enum Op {
    Seed,
    Mkdir(String),
    Touch { dir: String, file: String },
    Search(String),
    Rm(String),
    Mv { source: String, destination: String, file: String },
    Drain,
    Tree,
    Ls(String),
    Rename { old: String, new: String },
    Cp { file: String, destination: String },
    Sort(String),
    Undo,
    Dump,
}

impl OpCode {
    pub fn to_op(&self, args: Vec<String>) -> Result<Op, ParseError> {
        let mut it = args.into_iter();
        let op = match self {
            Self::Seed => Op::Seed,
            Self::Mkdir => Op::Mkdir(consume_param(self, "name", &mut it)?),
            Self::Touch => Op::Touch {
                dir: consume_param(self, "dir", &mut it)?,
                file: consume_param(self, "file", &mut it)?,
            },
            Self::Search => Op::Search(consume_param(self, "file", &mut it)?),
            Self::Rm => Op::Rm(consume_param(self, "file", &mut it)?),
            Self::Mv => Op::Mv {
                source: consume_param(self, "source", &mut it)?,
                destination: consume_param(self, "destination", &mut it)?,
                file: consume_param(self, "file", &mut it)?,
            },
            Self::Drain => Op::Drain,
            Self::Tree => Op::Tree,
            Self::Ls => Op::Ls(consume_param(self, "dir", &mut it)?),
            Self::Rename => Op::Rename {
                old: consume_param(self, "old", &mut it)?,
                new: consume_param(self, "new", &mut it)?,
            },
            Self::Cp => Op::Cp {
                file: consume_param(self, "file", &mut it)?,
                destination: consume_param(self, "destination", &mut it)?,
            },
            Self::Sort => Op::Sort(consume_param(self, "dir", &mut it)?),
            Self::Undo => Op::Undo,
            Self::Dump => Op::Dump,
        };
        no_further_params(self, &mut it)?;
        Ok(op)
    }

    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "--seed" => Some(Self::Seed),
            "--mkdir" => Some(Self::Mkdir),
            "--touch" => Some(Self::Touch),
            "--search" => Some(Self::Search),
            "--rm" => Some(Self::Rm),
            "--mv" => Some(Self::Mv),
            "--drain" => Some(Self::Drain),
            "--tree" => Some(Self::Tree),
            "--ls" => Some(Self::Ls),
            "--rename" => Some(Self::Rename),
            "--cp" => Some(Self::Cp),
            "--sort" => Some(Self::Sort),
            "--undo" => Some(Self::Undo),
            "--dump" => Some(Self::Dump),
            _ => None,
        }
    }
}

impl Op {
    pub fn to_code(&self) -> OpCode {
        match self {
            Self::Seed => OpCode::Seed,
            Self::Mkdir(_) => OpCode::Mkdir,
            Self::Touch { .. } => OpCode::Touch,
            Self::Search(_) => OpCode::Search,
            Self::Rm(_) => OpCode::Rm,
            Self::Mv { .. } => OpCode::Mv,
            Self::Drain => OpCode::Drain,
            Self::Tree => OpCode::Tree,
            Self::Ls(_) => OpCode::Ls,
            Self::Rename { .. } => OpCode::Rename,
            Self::Cp { .. } => OpCode::Cp,
            Self::Sort(_) => OpCode::Sort,
            Self::Undo => OpCode::Undo,
            Self::Dump => OpCode::Dump,
        }
    }
}

pub fn parse_pipeline<T>(args: impl IntoIterator<Item = T>) -> Result<Vec<Op>, ParseError>
where
    T: AsRef<str>,
{
    let mut ops = Vec::<(OpCode, Vec<String>)>::new();
    for arg in args {
        if let Some(oc) = OpCode::from_arg(arg.as_ref()) {
            ops.push((oc, vec![]))
        } else {
            let latest = ops
                .last_mut()
                .ok_or_else(|| ParseError::ArgBeforeFirstOp(arg.as_ref().into()))?;
            latest.1.push(arg.as_ref().into());
        }
    }
    ops.into_iter().map(|(oc, args)| oc.to_op(args)).collect()
}

fn consume_param(
    oc: &OpCode,
    name: &'static str,
    args: &mut impl Iterator<Item = String>,
) -> Result<String, ParseError> {
    args.next().ok_or_else(|| ParseError::MissingArg {
        oc: *oc,
        name: name,
    })
}

fn no_further_params(
    oc: &OpCode,
    args: &mut impl Iterator<Item = String>,
) -> Result<(), ParseError> {
    let c = args.count();
    if c == 0 {
        Ok(())
    } else {
        Err(ParseError::TooManyArgs { oc: *oc, excess: c })
    }
}
