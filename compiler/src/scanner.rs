use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::ProtowrapError;
use crate::line::{classify, LineClass};
use crate::resolve::{resolve_field, wrapper_name, NATIVE_TYPES};
use crate::types::{FileScan, MessageDescriptor};
use crate::utils::normalize_separators;

/// Per-file parse state. Reinitialized for every file: built-in status of
/// an enum is never visible outside the file that declared it.
#[derive(Debug, Clone, PartialEq)]
pub struct FileContext {
    pub package:     String,
    pub outer_class: Option<String>,
    pub built_ins:   HashSet<String>,
}

impl FileContext {
    pub fn new(fallback_package: &str) -> Self {
        FileContext {
            package:     fallback_package.to_string(),
            outer_class: None,
            built_ins:   NATIVE_TYPES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

enum ScanState {
    Idle,
    InEnum,
    InMessage(MessageDescriptor),
}

/// Scans one schema file from disk.
pub fn scan_file(path: &Path, fallback_package: &str) -> Result<FileScan, ProtowrapError> {
    let text = fs::read_to_string(path)?;
    let label = normalize_separators(&path.to_string_lossy());
    scan_text(&label, &text, fallback_package)
}

/// Walks a file's lines once, top to bottom, through the three-state
/// machine. Enum closing braces are consumed; message closing braces
/// finalize the open descriptor. A `Malformed` classification aborts the
/// scan with file and line context.
pub fn scan_text(label: &str, text: &str, fallback_package: &str) -> Result<FileScan, ProtowrapError> {
    let mut ctx = FileContext::new(fallback_package);
    let mut state = ScanState::Idle;
    let mut messages: Vec<MessageDescriptor> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let class = match classify(raw) {
            LineClass::Malformed(msg) => {
                return Err(ProtowrapError::Parse {
                    file: label.to_string(),
                    line: line_no,
                    msg,
                });
            }
            class => class,
        };

        state = match (state, class) {
            (ScanState::Idle, LineClass::PackageOption(ns)) => {
                ctx.package = ns;
                ScanState::Idle
            }
            (ScanState::Idle, LineClass::OuterClassOption(cn)) => {
                ctx.outer_class = Some(cn);
                ScanState::Idle
            }
            (ScanState::Idle, LineClass::EnumOpen(name)) => {
                ctx.built_ins.insert(name);
                ScanState::InEnum
            }
            (ScanState::Idle, LineClass::MessageOpen(name)) => {
                ScanState::InMessage(open_message(&ctx, name, line_no))
            }
            (ScanState::Idle, LineClass::BlockClose) => {
                debug!(file = label, line = line_no, "stray closing brace outside any block");
                ScanState::Idle
            }
            (ScanState::InEnum, LineClass::BlockClose) => ScanState::Idle,
            (ScanState::InMessage(mut message), LineClass::FieldDecl { style, type_token, name }) => {
                message
                    .accessors
                    .push(resolve_field(&ctx, style, &type_token, &name, line_no));
                ScanState::InMessage(message)
            }
            (ScanState::InMessage(message), LineClass::BlockClose) => {
                messages.push(message);
                ScanState::Idle
            }
            // Comments, enum members, unrecognized lines, and declarations
            // outside their expected state have no effect.
            (state, _) => state,
        };
    }

    if let ScanState::InMessage(message) = state {
        warn!(
            file = label,
            name = %message.name,
            "message block never closed, finalizing at end of file"
        );
        messages.push(message);
    }

    Ok(FileScan {
        path:        label.to_string(),
        package:     ctx.package,
        outer_class: ctx.outer_class,
        messages,
    })
}

fn open_message(ctx: &FileContext, name: String, line: usize) -> MessageDescriptor {
    let full_name = match &ctx.outer_class {
        Some(outer) => format!("{}.{}.{}", ctx.package, outer, name),
        None => name.clone(),
    };
    MessageDescriptor {
        wrapper_name: wrapper_name(ctx.outer_class.as_deref(), &name),
        full_name,
        name,
        accessors: Vec::new(),
        line,
    }
}
