use crate::scanner::FileContext;
use crate::types::{AccessorSpec, FieldKind, FieldStyle};
use crate::utils::{accessor_name, pascal_case};

/// Scalar type names every file starts out with. Enum names declared in the
/// same file join this set as the scanner encounters them; the set never
/// carries over to the next file.
pub const NATIVE_TYPES: [&str; 9] = [
    "string", "bytes", "uint32", "bool", "double", "sint64", "uint64", "int32", "int64",
];

/// Decides whether a declared type token is directly representable or a
/// reference to another generated message. Same-package references are
/// normalized by stripping the current namespace prefix before lookup.
pub fn resolve_type(ctx: &FileContext, token: &str) -> FieldKind {
    let prefix = format!("{}.", ctx.package);
    let local = token.strip_prefix(prefix.as_str()).unwrap_or(token);
    let bare = local.rsplit('.').next().unwrap_or(local);

    if ctx.built_ins.contains(bare) {
        FieldKind::BuiltIn
    } else {
        FieldKind::Message {
            wrapper: wrapper_name(ctx.outer_class.as_deref(), local),
        }
    }
}

/// Wrapper-facing type name: outer-class-prefixed camel case of the local
/// name. Used both for message declarations and for message references so
/// the two always agree.
pub fn wrapper_name(outer_class: Option<&str>, local: &str) -> String {
    let flat = local.replace('.', "_");
    match outer_class {
        Some(outer) => pascal_case(&format!("{}_{}", outer, flat)),
        None => pascal_case(&flat),
    }
}

/// Resolves one field declaration against the context as of its line.
pub fn resolve_field(
    ctx: &FileContext,
    style: FieldStyle,
    type_token: &str,
    name: &str,
    line: usize,
) -> AccessorSpec {
    AccessorSpec {
        accessor: accessor_name(name),
        attr:     pascal_case(name),
        style,
        kind: resolve_type(ctx, type_token),
        line,
    }
}
