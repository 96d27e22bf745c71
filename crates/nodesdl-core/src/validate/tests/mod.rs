mod validate_filter_tests;
mod validate_node_tests;
mod validate_update_tests;

use crate::Schema;
use crate::SchemaBuilder;
use crate::global_id::new_global_id;
use serde_json::Value as JsonValue;

const TEST_SCHEMA: &str = r#"
enum Color { RED GREEN }
scalar Json

type NodeWithScalars implements Node {
  id: ID!
  reqInt: Int!
  optInt: Int
  reqFloat: Float!
  optFloat: Float
  optString: String
  optBool: Boolean
  optColor: Color
  optJson: Json
  tags: [String]
  scores: [Int]!
}

type Foo implements Node { id: ID! }

type Address {
  street: String!
  zip: String
}

type Person implements Node {
  id: ID!
  name: String!
  address: Address
  addresses: [Address]
  bestFriend: Person
  companion: Companion
  followers: NodeConnection(Person, following)
  following: NodeConnection(Person, followers)
  friends: NodeConnection(Person, friends, Friendship)
  named: Named
  acquaintances: [Named]
  pets: [Pet]
}

type Friendship {
  since: Int!
  note: String
}

interface Named { name: String! }
type Pet implements Node & Named { id: ID! name: String! }
type Robot implements Node & Named { id: ID! name: String! serial: Int }
union Companion = Pet | Robot

interface Shape { area: Float }
type Circle implements Shape { area: Float radius: Float! }
type Square implements Shape { area: Float side: Float! }
interface Labeled { type: String }
type Tag implements Labeled { type: String name: String }
type Sticker implements Labeled { type: String }
type Photo { url: String! }
type Clip { url: String! seconds: Int }
union Media = Photo | Clip

type Drawing implements Node {
  id: ID!
  label: Labeled
  media: Media
  shape: Shape
  shapes: [Shape]
  title: String
}
"#;

fn test_schema() -> Schema {
    SchemaBuilder::new()
        .load_str(None, TEST_SCHEMA)
        .expect("test schema parses")
        .build()
        .expect("test schema builds")
}

fn id_for(type_name: &str) -> JsonValue {
    JsonValue::String(new_global_id(type_name).expect("valid type name"))
}
