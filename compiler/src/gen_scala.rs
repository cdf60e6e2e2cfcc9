use crate::types::{AccessorSpec, DeserializerDescriptor, FieldKind, FieldStyle, MessageDescriptor};

/// Renders the wrapper artifact: one implicit coercion plus one wrapper
/// class per message, in traversal order. The wrapper always holds an
/// `Option` of the raw type so a wrapper nested under an optional or
/// repeated accessor can represent "no value at all".
pub fn render_wrapper_source(
    package: &str,
    support_package: &str,
    import_groups: &[String],
    messages: &[MessageDescriptor],
) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("package {}", package));
    lines.push(String::new());
    for group in import_groups {
        lines.push(format!("import {}._", group));
    }
    if !import_groups.is_empty() {
        lines.push(String::new());
    }
    lines.push("import scala.collection.JavaConversions._".to_string());
    lines.push(format!("import {}.Optional._", support_package));
    lines.push(String::new());
    lines.push("object OptionalProtos {".to_string());
    lines.push(String::new());

    for message in messages {
        lines.push(render_wrapper_block(message));
    }

    lines.push("}".to_string());
    lines.join("\n") + "\n"
}

fn render_wrapper_block(message: &MessageDescriptor) -> String {
    let wrapper = &message.wrapper_name;
    let raw = &message.full_name;
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "implicit def proto2Opt{wrapper}(a: {raw}): Opt{wrapper} = new Opt{wrapper}(Some(a))"
    ));
    lines.push(format!(
        "class Opt{wrapper}(real: Option[{raw}]) extends OptionalStruct(real) {{"
    ));
    for accessor in &message.accessors {
        lines.push(format!("  {}", render_accessor(accessor)));
    }
    lines.push("}".to_string());
    lines.push(String::new());
    lines.join("\n")
}

/// One accessor line per the style × kind contract: optional fields are
/// presence-checked, required fields read unconditionally, repeated fields
/// produce an ordered list; message-typed values are re-wrapped.
pub fn render_accessor(spec: &AccessorSpec) -> String {
    let acc = &spec.accessor;
    let attr = &spec.attr;
    match (spec.style, &spec.kind) {
        (FieldStyle::Optional, FieldKind::BuiltIn) => {
            format!("val {acc} = optionally(_.has{attr}, _.get{attr})")
        }
        (FieldStyle::Optional, FieldKind::Message { wrapper }) => {
            format!("val {acc} = new Opt{wrapper}(optionally(_.has{attr}, _.get{attr}))")
        }
        (FieldStyle::Required, FieldKind::BuiltIn) => {
            format!("val {acc} = optionally(_.get{attr})")
        }
        (FieldStyle::Required, FieldKind::Message { wrapper }) => {
            format!("val {acc} = new Opt{wrapper}(optionally(_.get{attr}))")
        }
        (FieldStyle::Repeated, FieldKind::BuiltIn) => {
            format!("val {acc} = optionally(_.get{attr}List.toList)")
        }
        (FieldStyle::Repeated, FieldKind::Message { wrapper }) => {
            format!("val {acc} = optionally(_.get{attr}List.toList.map {{ i => new Opt{wrapper}(Some(i)) }})")
        }
    }
}

/// Renders the registry artifact: one descriptor per message exposing byte
/// deserialization, string deserialization, and class identity.
pub fn render_registry_source(
    package: &str,
    import_groups: &[String],
    descriptors: &[DeserializerDescriptor],
) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("package {}", package));
    lines.push(String::new());
    lines.push(format!("import {}._", package));
    lines.push(String::new());
    lines.push("import com.google.protobuf.{ ByteString, InvalidProtocolBufferException }".to_string());
    lines.push(String::new());
    for group in import_groups {
        lines.push(format!("import {}._", group));
    }
    if !import_groups.is_empty() {
        lines.push(String::new());
    }
    lines.push("object Deserializers {".to_string());
    lines.push(String::new());

    for descriptor in descriptors {
        lines.push(render_descriptor(descriptor));
    }

    lines.push("}".to_string());
    lines.join("\n") + "\n"
}

fn render_descriptor(descriptor: &DeserializerDescriptor) -> String {
    let key = &descriptor.key;
    let raw = &descriptor.full_name;
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("  def {key}() = new ProtoDescriptor[{raw}] {{"));
    lines.push(format!("    def deserializeString(bytes: ByteString) = {raw}.parseFrom(bytes)"));
    lines.push(format!("    def deserializeBytes(bytes: Array[Byte]) = {raw}.parseFrom(bytes)"));
    lines.push(format!("    def getKlass = classOf[{raw}]"));
    lines.push("  }".to_string());
    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(style: FieldStyle, kind: FieldKind) -> AccessorSpec {
        AccessorSpec {
            accessor: "status".to_string(),
            attr:     "Status".to_string(),
            style,
            kind,
            line: 1,
        }
    }

    fn message_kind() -> FieldKind {
        FieldKind::Message { wrapper: "DemoStatus".to_string() }
    }

    #[test]
    fn optional_accessors_are_presence_checked() {
        assert_eq!(
            render_accessor(&spec(FieldStyle::Optional, FieldKind::BuiltIn)),
            "val status = optionally(_.hasStatus, _.getStatus)"
        );
        assert_eq!(
            render_accessor(&spec(FieldStyle::Optional, message_kind())),
            "val status = new OptDemoStatus(optionally(_.hasStatus, _.getStatus))"
        );
    }

    #[test]
    fn required_accessors_read_unconditionally() {
        assert_eq!(
            render_accessor(&spec(FieldStyle::Required, FieldKind::BuiltIn)),
            "val status = optionally(_.getStatus)"
        );
        assert_eq!(
            render_accessor(&spec(FieldStyle::Required, message_kind())),
            "val status = new OptDemoStatus(optionally(_.getStatus))"
        );
    }

    #[test]
    fn repeated_accessors_produce_ordered_lists() {
        assert_eq!(
            render_accessor(&spec(FieldStyle::Repeated, FieldKind::BuiltIn)),
            "val status = optionally(_.getStatusList.toList)"
        );
        assert_eq!(
            render_accessor(&spec(FieldStyle::Repeated, message_kind())),
            "val status = optionally(_.getStatusList.toList.map { i => new OptDemoStatus(Some(i)) })"
        );
    }

    #[test]
    fn zero_field_messages_render_a_header_and_footer_only() {
        let message = MessageDescriptor {
            name:         "Empty".to_string(),
            full_name:    "a.Outer.Empty".to_string(),
            wrapper_name: "OuterEmpty".to_string(),
            accessors:    Vec::new(),
            line:         1,
        };
        let block = render_wrapper_block(&message);
        let expected = "implicit def proto2OptOuterEmpty(a: a.Outer.Empty): OptOuterEmpty = new OptOuterEmpty(Some(a))\n\
                        class OptOuterEmpty(real: Option[a.Outer.Empty]) extends OptionalStruct(real) {\n\
                        }\n";
        assert_eq!(block, expected);
        assert!(!block.contains("val "));
    }

    #[test]
    fn wrapper_source_carries_the_configured_packages() {
        let source = render_wrapper_source(
            "gen.optionals",
            "gen.util",
            &["org.example.proto.Demo".to_string()],
            &[],
        );
        assert!(source.starts_with("package gen.optionals\n"));
        assert!(source.contains("import org.example.proto.Demo._"));
        assert!(source.contains("import scala.collection.JavaConversions._"));
        assert!(source.contains("import gen.util.Optional._"));
        assert!(source.contains("object OptionalProtos {"));
        assert!(source.ends_with("}\n"));
    }

    #[test]
    fn registry_source_renders_one_descriptor_per_entry() {
        let descriptors = vec![DeserializerDescriptor {
            key:       "point".to_string(),
            full_name: "org.example.proto.Demo.Point".to_string(),
        }];
        let source = render_registry_source("gen.deserializers", &[], &descriptors);
        assert!(source.contains("  def point() = new ProtoDescriptor[org.example.proto.Demo.Point] {"));
        assert!(source.contains(
            "    def deserializeString(bytes: ByteString) = org.example.proto.Demo.Point.parseFrom(bytes)"
        ));
        assert!(source.contains(
            "    def deserializeBytes(bytes: Array[Byte]) = org.example.proto.Demo.Point.parseFrom(bytes)"
        ));
        assert!(source.contains("    def getKlass = classOf[org.example.proto.Demo.Point]"));
    }
}
