//! Synthetic schemas for the parser benchmarks.

use std::fmt::Write;

/// Builds a schema with `type_count` node types, each carrying scalar
/// fields, a `NodeConnection` back to the previous type, and a filter and
/// order over it.
pub fn synthetic_schema(type_count: usize) -> String {
    let mut schema = String::from(
        "interface Node { id: ID! }\n\
         scalar DateTime @format(pattern: \"iso8601\")\n\
         enum Status { ACTIVE SUSPENDED DELETED }\n",
    );
    for i in 0..type_count {
        let prev = if i == 0 { type_count - 1 } else { i - 1 };
        let _ = write!(
            schema,
            r#"
"""
Entity number {i}.
"""
type Entity{i} implements Node @model(table: "entity_{i}") {{
  id: ID!
  name: String! @index
  createdAt: DateTime
  status: Status
  tags: ScalarConnection(String)
  owner: Entity{prev}
  children(first: Int = 20, after: String): NodeConnection(Entity{prev}, owner, ChildEdge{i})!
}}

filter on NodeConnection(Entity{i}) {{
  active: {{ status: {{ eq: ACTIVE }} }}
  named(name: String!): {{ name: {{ eq: $name }} }}
}}

order on [Entity{i}] {{
  newest: [{{ createdAt: DESC }}, {{ name: ASC }}]
}}
"#,
        );
    }
    schema
}

pub fn mutations(count: usize) -> String {
    let mut schema = String::new();
    for i in 0..count {
        let _ = writeln!(
            schema,
            "mutation Update{i}(id: ID!, name: String, tags: [String!] = []) @auth(role: ADMIN) {{ entity: Entity{i} }}",
        );
    }
    schema
}
