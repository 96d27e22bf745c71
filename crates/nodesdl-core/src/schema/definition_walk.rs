use crate::schema::schema_builder::LoadedDocument;
use crate::schema::SchemaBuildError;
use nodesdl_parser::visitor::visit;
use nodesdl_parser::visitor::AstNodeRef;
use nodesdl_parser::visitor::NodeKind;
use nodesdl_parser::visitor::VisitAction;
use nodesdl_parser::visitor::VisitorMap;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Calls `handle` for every top-level definition of `kind` across all
/// loaded documents, in load order. Nothing below the top level is visited,
/// so the definitions wrapped by `extend` are only seen when `kind` is
/// `TypeExtension`.
///
/// Returns the number of definitions handled. The first error aborts the
/// walk.
pub(super) fn for_each_definition(
    documents: &[LoadedDocument],
    kind: NodeKind,
    mut handle: impl FnMut(&Path, AstNodeRef<'_>) -> Result<()>,
) -> Result<usize> {
    let mut count = 0;
    for loaded in documents {
        let file_path = loaded.file_path.as_path();
        let mut failure = None;
        let mut visitor = VisitorMap::new()
            .on(kind, |node| match handle(file_path, node) {
                Ok(()) => {
                    count += 1;
                    VisitAction::Skip
                },
                Err(err) => {
                    failure = Some(err);
                    VisitAction::Break
                },
            })
            .enter_any(|node| match node.kind() {
                NodeKind::Document => VisitAction::Continue,
                _ => VisitAction::Skip,
            });
        visit(&loaded.document, &mut visitor)?;
        drop(visitor);

        if let Some(err) = failure {
            return Err(err);
        }
    }
    Ok(count)
}
