use crate::ast::AstPos;
use crate::ast::Directive;
use crate::ast::FieldDefinition;
use crate::ast::InputValueDefinition;
use serde::Deserialize;
use serde::Serialize;

/// `mutation CreatePost(title: String!) @dir { post: Post }`
///
/// `fields` describes the shape the mutation returns.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MutationDefinition {
    pub position: Option<AstPos>,
    pub description: Option<String>,
    pub name: String,
    pub arguments: Vec<InputValueDefinition>,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
}
