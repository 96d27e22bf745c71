use crate::loc;
use crate::schema::definition_walk::for_each_definition;
use crate::schema::schema_builder::LoadedDocument;
use crate::schema::SchemaBuildError;
use nodesdl_parser::ast;
use nodesdl_parser::visitor::AstNodeRef;
use nodesdl_parser::visitor::NodeKind;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// `extend` definitions grouped by the name they extend, each paired with
/// the file it was loaded from.
///
/// Collecting checks that every extension targets a definition of the same
/// kind somewhere in the loaded documents.
#[derive(Debug, Default)]
pub(super) struct ExtensionIndex {
    by_name: HashMap<String, Vec<(PathBuf, ast::Definition)>>,
}
impl ExtensionIndex {
    pub fn collect(documents: &[LoadedDocument]) -> Result<Self> {
        // The first definition of a name wins; duplicates are reported
        // later, when the definition itself is analyzed.
        let mut base_keywords: HashMap<&str, &'static str> = HashMap::new();
        for loaded in documents {
            for def in &loaded.document.definitions {
                if let ast::Definition::Extension(_) = def {
                    continue;
                }
                if let Some(name) = def.name() {
                    base_keywords.entry(name).or_insert(def.keyword());
                }
            }
        }

        let mut index = Self::default();
        let count = for_each_definition(documents, NodeKind::TypeExtension, |file_path, node| {
            let AstNodeRef::TypeExtension(ext) = node else {
                return Ok(());
            };
            index.add(&base_keywords, file_path, ext)
        })?;
        log::debug!("Collected {count} type extension(s)");
        Ok(index)
    }

    fn add(
        &mut self,
        base_keywords: &HashMap<&str, &'static str>,
        file_path: &Path,
        ext: &ast::TypeExtension,
    ) -> Result<()> {
        let extended = &*ext.definition;
        let type_name = extended.name().unwrap_or_default();
        let extension_loc = loc::FilePosition::from_ast_pos(file_path, ext.position);

        match base_keywords.get(type_name) {
            None => Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name: type_name.to_string(),
                extension_loc,
            }),

            Some(base_keyword) if *base_keyword != extended.keyword() => {
                Err(SchemaBuildError::ExtensionKindMismatch {
                    type_name: type_name.to_string(),
                    base_kind: base_keyword.to_string(),
                    extension_kind: extended.keyword().to_string(),
                    extension_loc,
                })
            },

            Some(_) => {
                log::trace!("Queued `extend {}` for `{type_name}`", extended.keyword());
                self.by_name
                    .entry(type_name.to_string())
                    .or_default()
                    .push((file_path.to_path_buf(), extended.clone()));
                Ok(())
            },
        }
    }

    /// Extensions of `name`, in load order.
    pub fn for_name(&self, name: &str) -> &[(PathBuf, ast::Definition)] {
        self.by_name.get(name).map(Vec::as_slice).unwrap_or_default()
    }
}
