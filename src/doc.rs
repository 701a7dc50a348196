use crate::op::OpCode;
use strum::IntoEnumIterator;

pub struct OpDoc {
    pub flag: &'static str,
    pub args: &'static str,
    pub short: &'static str,
    pub example: &'static [&'static str],
}

impl OpCode {
    pub fn doc(&self) -> OpDoc {
        match self {
            OpCode::Seed => OpDoc {
                flag: "--seed",
                args: "",
                short: "Create the sample directories and files.",
                example: &["--seed", "--tree"],
            },
            OpCode::Mkdir => OpDoc {
                flag: "--mkdir",
                args: " name",
                short: "Create an empty directory.",
                example: &["--mkdir", "inbox"],
            },
            OpCode::Touch => OpDoc {
                flag: "--touch",
                args: " dir file",
                short: "Add a file to a directory.",
                example: &["--mkdir", "inbox", "--touch", "inbox", "note.txt"],
            },
            OpCode::Search => OpDoc {
                flag: "--search",
                args: " file",
                short: "Ask whether a filename was ever inserted.",
                example: &["--seed", "--search", "resume.docx"],
            },
            OpCode::Rm => OpDoc {
                flag: "--rm",
                args: " file",
                short: "Remove the first entry with this name, searching directories in order.",
                example: &["--seed", "--rm", "resume.docx"],
            },
            OpCode::Mv => OpDoc {
                flag: "--mv",
                args: " source destination file",
                short: "Queue a move request; nothing happens until --drain.",
                example: &["--seed", "--mv", "documents", "music", "resume.docx", "--drain"],
            },
            OpCode::Drain => OpDoc {
                flag: "--drain",
                args: "",
                short: "Process every queued move against the current state.",
                example: &["--seed", "--mv", "documents", "music", "resume.docx", "--drain"],
            },
            OpCode::Tree => OpDoc {
                flag: "--tree",
                args: "",
                short: "Print every directory and its entries.",
                example: &["--seed", "--tree"],
            },
            OpCode::Ls => OpDoc {
                flag: "--ls",
                args: " dir",
                short: "Print one directory's entries.",
                example: &["--seed", "--ls", "documents"],
            },
            OpCode::Rename => OpDoc {
                flag: "--rename",
                args: " old new",
                short: "Rename a directory in place, keeping its contents.",
                example: &["--seed", "--rename", "documents", "papers"],
            },
            OpCode::Cp => OpDoc {
                flag: "--cp",
                args: " file destination",
                short: "Copy the first entry with this name into a directory as copy_<file>.",
                example: &["--seed", "--cp", "resume.docx", "music"],
            },
            OpCode::Sort => OpDoc {
                flag: "--sort",
                args: " dir",
                short: "Sort one directory's entries by name.",
                example: &["--seed", "--sort", "documents", "--ls", "documents"],
            },
            OpCode::Undo => OpDoc {
                flag: "--undo",
                args: "",
                short: "Restore the structure from before the last mutating op.",
                example: &["--seed", "--rm", "resume.docx", "--undo"],
            },
            OpCode::Dump => OpDoc {
                flag: "--dump",
                args: "",
                short: "Print the whole structure as JSON.",
                example: &["--seed", "--dump"],
            },
        }
    }
}

pub fn usage() -> String {
    let mut sections: Vec<&str> = vec![];
    sections.push("Usage: filecab [op...]\n\n");
    sections.push("Valid ops:\n\n");

    for oc in OpCode::iter() {
        let doc = oc.doc();
        sections.extend([
            doc.flag,
            ": ",
            doc.short,
            "\n    Usage: ",
            doc.flag,
            doc.args,
            "\n    Example:\n      filecab",
        ]);
        for arg in doc.example {
            sections.extend([" ", arg]);
        }
        sections.push("\n\n");
    }
    sections.concat()
}
