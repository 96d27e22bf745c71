//! Renders AST nodes back to canonical SDL text.
//!
//! `parse(print(document))` yields `document` again once positions are
//! stripped. Block strings only survive as block strings when their content
//! has no common indentation and no leading or trailing blank lines; other
//! block strings are printed as quoted strings.

use crate::ast;
use std::fmt;
use std::fmt::Display;
use std::fmt::Write;

const INDENT: &str = "  ";

/// Renders a whole document. Definitions are separated by a blank line.
pub fn print_document(document: &ast::Document) -> String {
    document.to_string()
}

/// Renders a type annotation, e.g. `[User!]!` or
/// `NodeConnection(User, friends, FriendEdge)`.
pub fn print_type_annotation(annotation: &ast::TypeAnnotation) -> String {
    annotation.to_string()
}

pub fn print_value(value: &ast::Value) -> String {
    value.to_string()
}

impl Display for ast::Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut definitions = self.definitions.iter().peekable();
        while let Some(definition) = definitions.next() {
            Display::fmt(definition, f)?;
            if definitions.peek().is_some() {
                f.write_char('\n')?;
            }
        }
        Ok(())
    }
}

impl Display for ast::Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ast::Definition::ObjectType(def) => {
                write_description(f, def.description.as_deref(), "")?;
                write!(f, "type {}", def.name)?;
                if !def.implements_interfaces.is_empty() {
                    f.write_str(" implements ")?;
                    write_separated(f, &def.implements_interfaces, " & ", |f, t| {
                        f.write_str(&t.name)
                    })?;
                }
                write_directives(f, &def.directives)?;
                write_fields(f, &def.fields)?;
            },
            ast::Definition::Interface(def) => {
                write_description(f, def.description.as_deref(), "")?;
                write!(f, "interface {}", def.name)?;
                write_directives(f, &def.directives)?;
                write_fields(f, &def.fields)?;
            },
            ast::Definition::Union(def) => {
                write_description(f, def.description.as_deref(), "")?;
                write!(f, "union {}", def.name)?;
                write_directives(f, &def.directives)?;
                if !def.types.is_empty() {
                    f.write_str(" = ")?;
                    write_separated(f, &def.types, " | ", |f, t| f.write_str(&t.name))?;
                }
            },
            ast::Definition::Scalar(def) => {
                write_description(f, def.description.as_deref(), "")?;
                write!(f, "scalar {}", def.name)?;
                write_directives(f, &def.directives)?;
            },
            ast::Definition::Enum(def) => {
                write_description(f, def.description.as_deref(), "")?;
                write!(f, "enum {}", def.name)?;
                write_directives(f, &def.directives)?;
                if !def.values.is_empty() {
                    f.write_str(" {\n")?;
                    for value in &def.values {
                        write_description(f, value.description.as_deref(), INDENT)?;
                        write!(f, "{INDENT}{}", value.name)?;
                        write_directives(f, &value.directives)?;
                        f.write_char('\n')?;
                    }
                    f.write_char('}')?;
                }
            },
            ast::Definition::InputObject(def) => {
                write_description(f, def.description.as_deref(), "")?;
                write!(f, "input {}", def.name)?;
                write_directives(f, &def.directives)?;
                write_fields(f, &def.fields)?;
            },
            ast::Definition::Mutation(def) => {
                write_description(f, def.description.as_deref(), "")?;
                write!(f, "mutation {}", def.name)?;
                write_arguments_definition(f, &def.arguments)?;
                write_directives(f, &def.directives)?;
                write_fields(f, &def.fields)?;
            },
            ast::Definition::Filter(def) => {
                write_description(f, def.description.as_deref(), "")?;
                write!(f, "filter on {} {{\n", def.target)?;
                for condition in &def.conditions {
                    write_named_expression(
                        f,
                        condition.description.as_deref(),
                        &condition.name,
                        &condition.arguments,
                        &condition.value,
                    )?;
                }
                f.write_char('}')?;
            },
            ast::Definition::Order(def) => {
                write_description(f, def.description.as_deref(), "")?;
                write!(f, "order on {} {{\n", def.target)?;
                for expression in &def.expressions {
                    write_named_expression(
                        f,
                        expression.description.as_deref(),
                        &expression.name,
                        &expression.arguments,
                        &expression.value,
                    )?;
                }
                f.write_char('}')?;
            },
            ast::Definition::Extension(ext) => {
                f.write_str("extend ")?;
                Display::fmt(ext.definition.as_ref(), f)?;
                // The nested definition already ended its own line.
                return Ok(());
            },
        }
        f.write_char('\n')
    }
}

impl Display for ast::TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ast::TypeAnnotation::Named(t) => f.write_str(&t.name),
            ast::TypeAnnotation::List(t) => write!(f, "[{}]", t.item_type),
            ast::TypeAnnotation::NonNull(t) => write!(f, "{}!", t.inner),
            ast::TypeAnnotation::NodeConnection(t) => {
                write!(f, "NodeConnection({}", t.target.name)?;
                if let Some(related_field) = &t.related_field {
                    write!(f, ", {related_field}")?;
                }
                write_edge_type_suffix(f, t.edge_type.as_ref())
            },
            ast::TypeAnnotation::ScalarConnection(t) => {
                write!(f, "ScalarConnection({}", t.target.name)?;
                write_edge_type_suffix(f, t.edge_type.as_ref())
            },
            ast::TypeAnnotation::ObjectConnection(t) => {
                write!(f, "ObjectConnection({}", t.target.name)?;
                write_edge_type_suffix(f, t.edge_type.as_ref())
            },
            ast::TypeAnnotation::Edge(t) => {
                write!(f, "Edge({}", t.target.name)?;
                write_edge_type_suffix(f, t.edge_type.as_ref())
            },
        }
    }
}

impl Display for ast::Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ast::Value::Variable(v) => write!(f, "${}", v.name),
            ast::Value::Int(v) => f.write_str(&v.raw),
            ast::Value::Float(v) => f.write_str(&v.raw),
            ast::Value::String(v) => {
                if v.is_block && block_string_round_trips(&v.value) {
                    write!(f, "\"\"\"\n{}\n\"\"\"", v.value.replace("\"\"\"", "\\\"\"\""))
                } else {
                    write_quoted(f, &v.value)
                }
            },
            ast::Value::Boolean(v) => f.write_str(if v.value { "true" } else { "false" }),
            ast::Value::Null(_) => f.write_str("null"),
            ast::Value::Enum(v) => f.write_str(&v.value),
            ast::Value::List(v) => {
                f.write_char('[')?;
                write_separated(f, &v.values, ", ", |f, item| Display::fmt(item, f))?;
                f.write_char(']')
            },
            ast::Value::Object(v) => {
                f.write_char('{')?;
                write_separated(f, &v.fields, ", ", |f, field| {
                    write!(f, "{}: {}", field.name, field.value)
                })?;
                f.write_char('}')
            },
        }
    }
}

fn write_edge_type_suffix(
    f: &mut fmt::Formatter<'_>,
    edge_type: Option<&ast::NamedType>,
) -> fmt::Result {
    if let Some(edge_type) = edge_type {
        write!(f, ", {}", edge_type.name)?;
    }
    f.write_char(')')
}

fn write_separated<T>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    separator: &str,
    write_item: impl Fn(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    let mut items = items.iter().peekable();
    while let Some(item) = items.next() {
        write_item(f, item)?;
        if items.peek().is_some() {
            f.write_str(separator)?;
        }
    }
    Ok(())
}

fn write_description(
    f: &mut fmt::Formatter<'_>,
    description: Option<&str>,
    indentation: &str,
) -> fmt::Result {
    if let Some(description) = description {
        f.write_str(indentation)?;
        write_quoted(f, description)?;
        f.write_char('\n')?;
    }
    Ok(())
}

fn write_directives(f: &mut fmt::Formatter<'_>, directives: &[ast::Directive]) -> fmt::Result {
    for directive in directives {
        write!(f, " @{}", directive.name)?;
        if !directive.arguments.is_empty() {
            f.write_char('(')?;
            write_separated(f, &directive.arguments, ", ", |f, arg| {
                write!(f, "{}: {}", arg.name, arg.value)
            })?;
            f.write_char(')')?;
        }
    }
    Ok(())
}

fn write_fields(f: &mut fmt::Formatter<'_>, fields: &[ast::FieldDefinition]) -> fmt::Result {
    if fields.is_empty() {
        return Ok(());
    }
    f.write_str(" {\n")?;
    for field in fields {
        write_description(f, field.description.as_deref(), INDENT)?;
        write!(f, "{INDENT}{}", field.name)?;
        write_arguments_definition(f, &field.arguments)?;
        write!(f, ": {}", field.field_type)?;
        write_directives(f, &field.directives)?;
        f.write_char('\n')?;
    }
    f.write_char('}')
}

fn write_arguments_definition(
    f: &mut fmt::Formatter<'_>,
    arguments: &[ast::InputValueDefinition],
) -> fmt::Result {
    if arguments.is_empty() {
        return Ok(());
    }
    f.write_char('(')?;
    write_separated(f, arguments, ", ", |f, arg| {
        if let Some(description) = &arg.description {
            write_quoted(f, description)?;
            f.write_char(' ')?;
        }
        write!(f, "{}: {}", arg.name, arg.value_type)?;
        if let Some(default_value) = &arg.default_value {
            write!(f, " = {default_value}")?;
        }
        write_directives(f, &arg.directives)
    })?;
    f.write_char(')')
}

fn write_named_expression(
    f: &mut fmt::Formatter<'_>,
    description: Option<&str>,
    name: &str,
    arguments: &[ast::InputValueDefinition],
    value: &ast::Value,
) -> fmt::Result {
    write_description(f, description, INDENT)?;
    write!(f, "{INDENT}{name}")?;
    write_arguments_definition(f, arguments)?;
    writeln!(f, ": {value}")
}

pub(crate) fn write_quoted(f: &mut impl Write, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '\r' => f.write_str("\\r"),
            '\n' => f.write_str("\\n"),
            '\t' => f.write_str("\\t"),
            '\u{0008}' => f.write_str("\\b"),
            '\u{000C}' => f.write_str("\\f"),
            '\\' => f.write_str("\\\\"),
            '"' => f.write_str("\\\""),
            c if c.is_control() => write!(f, "\\u{:04X}", c as u32),
            c => f.write_char(c),
        }?
    }
    f.write_char('"')
}

/// Whether printing `value` between `"""\n` and `\n"""` cooks back to the
/// same string.
fn block_string_round_trips(value: &str) -> bool {
    if value.contains('\r') || value.chars().any(|c| c.is_control() && c != '\n' && c != '\t') {
        return false;
    }
    let lines: Vec<&str> = value.split('\n').collect();
    let first_blank = lines.first().is_none_or(|line| line.trim().is_empty());
    let last_blank = lines.last().is_none_or(|line| line.trim().is_empty());
    if first_blank || last_blank {
        return false;
    }
    let common_indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);
    common_indent == 0 && !value.ends_with('\\')
}
