use crate::field_classifier;
use crate::loc;
use crate::schema::definition_walk::for_each_definition;
use crate::schema::extension_index::ExtensionIndex;
use crate::schema::schema::BUILTIN_SCALAR_NAMES;
use crate::schema::schema::NODE_INTERFACE_NAME;
use crate::schema::schema_builder::LoadedDocument;
use crate::schema::SchemaBuildError;
use crate::types::Argument;
use crate::types::Definition;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::FieldKind;
use crate::types::FilterType;
use crate::types::InputType;
use crate::types::InterfaceType;
use crate::types::MutationType;
use crate::types::ObjectType;
use crate::types::OrderType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;
use nodesdl_parser::ast;
use nodesdl_parser::printer::print_type_annotation;
use nodesdl_parser::visitor::AstNodeRef;
use nodesdl_parser::visitor::NodeKind;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// The outcome of the first analysis pass: every definition with its
/// fields classified as far as possible without knowing which types are
/// Nodes, plus the union membership index.
#[derive(Debug)]
pub(super) struct UnresolvedSchema {
    pub definitions: IndexMap<String, Definition>,
    /// Type name -> names of the unions listing it as a member.
    pub union_memberships: IndexMap<String, Vec<String>>,
}

/// The first analysis pass. Each definition kind is handled by its own
/// sub-pass over the loaded documents, in a fixed order, so that later
/// kinds can consult what earlier kinds recorded.
pub(super) struct DefinitionPass<'a> {
    definitions: IndexMap<String, Definition>,
    extensions: &'a ExtensionIndex,
    /// Interface name -> names of the types that declare they implement it.
    implementors: IndexMap<String, Vec<String>>,
    union_memberships: IndexMap<String, Vec<String>>,
}
impl<'a> DefinitionPass<'a> {
    pub fn run(documents: &[LoadedDocument], extensions: &'a ExtensionIndex) -> Result<UnresolvedSchema> {
        let mut pass = DefinitionPass {
            definitions: IndexMap::new(),
            extensions,
            implementors: IndexMap::new(),
            union_memberships: IndexMap::new(),
        };

        // Scalars are recorded alongside enums so that fields naming a
        // custom scalar classify as scalars in every later sub-pass.
        let enum_count = for_each_definition(documents, NodeKind::EnumTypeDefinition, |file_path, node| {
            match node {
                AstNodeRef::EnumTypeDefinition(def) => pass.add_enum(file_path, def),
                _ => Ok(()),
            }
        })?;
        let scalar_count = for_each_definition(documents, NodeKind::ScalarTypeDefinition, |file_path, node| {
            match node {
                AstNodeRef::ScalarTypeDefinition(def) => pass.add_scalar(file_path, def),
                _ => Ok(()),
            }
        })?;
        log::debug!("Pass 1: {enum_count} enum(s), {scalar_count} custom scalar(s)");

        let type_count = for_each_definition(documents, NodeKind::ObjectTypeDefinition, |file_path, node| {
            match node {
                AstNodeRef::ObjectTypeDefinition(def) => pass.add_object_type(file_path, def),
                _ => Ok(()),
            }
        })?;
        log::debug!("Pass 1: {type_count} type(s)");

        pass.add_node_interface()?;

        let interface_count = for_each_definition(documents, NodeKind::InterfaceTypeDefinition, |file_path, node| {
            match node {
                AstNodeRef::InterfaceTypeDefinition(def) => pass.add_interface(file_path, def),
                _ => Ok(()),
            }
        })?;
        let union_count = for_each_definition(documents, NodeKind::UnionTypeDefinition, |file_path, node| {
            match node {
                AstNodeRef::UnionTypeDefinition(def) => pass.add_union(file_path, def),
                _ => Ok(()),
            }
        })?;
        log::debug!("Pass 1: {interface_count} interface(s), {union_count} union(s)");

        let input_count = for_each_definition(documents, NodeKind::InputObjectTypeDefinition, |file_path, node| {
            match node {
                AstNodeRef::InputObjectTypeDefinition(def) => pass.add_input(file_path, def),
                _ => Ok(()),
            }
        })?;
        let mutation_count = for_each_definition(documents, NodeKind::MutationDefinition, |file_path, node| {
            match node {
                AstNodeRef::MutationDefinition(def) => pass.add_mutation(file_path, def),
                _ => Ok(()),
            }
        })?;
        log::debug!("Pass 1: {input_count} input(s), {mutation_count} mutation(s)");

        let filter_count = for_each_definition(documents, NodeKind::FilterDefinition, |file_path, node| {
            match node {
                AstNodeRef::FilterDefinition(def) => pass.add_filter(file_path, def),
                _ => Ok(()),
            }
        })?;
        let order_count = for_each_definition(documents, NodeKind::OrderDefinition, |file_path, node| {
            match node {
                AstNodeRef::OrderDefinition(def) => pass.add_order(file_path, def),
                _ => Ok(()),
            }
        })?;
        log::debug!("Pass 1: {filter_count} filter(s), {order_count} order(s)");

        Ok(UnresolvedSchema {
            definitions: pass.definitions,
            union_memberships: pass.union_memberships,
        })
    }

    // =========================================================================
    // Sub-passes
    // =========================================================================

    fn add_enum(&mut self, file_path: &Path, def: &ast::EnumTypeDefinition) -> Result<()> {
        let def_location = schema_location(file_path, def.position);
        self.check_for_conflicting_definition(&def.name, &def_location)?;

        let mut directives = Directive::from_ast(file_path, &def.directives);
        let mut values: Vec<String> = def.values.iter().map(|val| val.name.to_string()).collect();
        for (ext_path, ext) in self.extensions.for_name(&def.name) {
            if let ast::Definition::Enum(ext) = ext {
                directives.extend(Directive::from_ast(ext_path, &ext.directives));
                values.extend(ext.values.iter().map(|val| val.name.to_string()));
            }
        }

        self.insert(Definition::Enum(EnumType {
            def_location,
            description: def.description.clone(),
            directives,
            name: def.name.to_string(),
            values,
        }));
        Ok(())
    }

    fn add_scalar(&mut self, file_path: &Path, def: &ast::ScalarTypeDefinition) -> Result<()> {
        let def_location = schema_location(file_path, def.position);
        self.check_for_conflicting_definition(&def.name, &def_location)?;

        self.insert(Definition::Scalar(ScalarType {
            def_location,
            description: def.description.clone(),
            directives: Directive::from_ast(file_path, &def.directives),
            name: def.name.to_string(),
        }));
        Ok(())
    }

    fn add_object_type(&mut self, file_path: &Path, def: &ast::ObjectTypeDefinition) -> Result<()> {
        let def_location = schema_location(file_path, def.position);
        self.check_for_conflicting_definition(&def.name, &def_location)?;

        let mut directives = Directive::from_ast(file_path, &def.directives);
        let mut implements_interfaces: Vec<String> = vec![];
        let mut field_sources = vec![(file_path, def.fields.as_slice())];
        for iface in &def.implements_interfaces {
            push_unique(&mut implements_interfaces, &iface.name);
        }
        for (ext_path, ext) in self.extensions.for_name(&def.name) {
            if let ast::Definition::ObjectType(ext) = ext {
                directives.extend(Directive::from_ast(ext_path, &ext.directives));
                for iface in &ext.implements_interfaces {
                    push_unique(&mut implements_interfaces, &iface.name);
                }
                field_sources.push((ext_path.as_path(), ext.fields.as_slice()));
            }
        }
        let fields = self.build_fields(&def.name, field_sources)?;

        for iface in &implements_interfaces {
            push_unique(self.implementors.entry(iface.to_string()).or_default(), &def.name);
        }
        let implements_node = implements_interfaces.iter().any(|iface| iface == NODE_INTERFACE_NAME);

        self.insert(Definition::Type(ObjectType {
            def_location,
            description: def.description.clone(),
            directives,
            fields,
            implements_interfaces,
            implements_node,
            member_of_unions: vec![],
            name: def.name.to_string(),
        }));
        Ok(())
    }

    /// Injects the built-in `Node` interface. Runs after the type sub-pass
    /// so that its implementations are known.
    fn add_node_interface(&mut self) -> Result<()> {
        self.check_for_conflicting_definition(NODE_INTERFACE_NAME, &loc::SchemaDefLocation::BuiltIn)?;

        let implementations = self.implementors.get(NODE_INTERFACE_NAME).cloned().unwrap_or_default();
        log::debug!(
            "Pass 1: injected the `{NODE_INTERFACE_NAME}` interface with {} implementation(s)",
            implementations.len(),
        );
        self.insert(Definition::Interface(InterfaceType {
            def_location: loc::SchemaDefLocation::BuiltIn,
            description: None,
            directives: vec![],
            every_type_implements_node: !implementations.is_empty(),
            fields: vec![Field {
                arguments: vec![],
                def_location: loc::SchemaDefLocation::BuiltIn,
                default_value: None,
                description: None,
                directives: vec![],
                is_required: true,
                kind: FieldKind::Scalar {
                    type_name: "ID".to_string(),
                    numeric: false,
                },
                name: "id".to_string(),
            }],
            no_type_implements_node: implementations.is_empty(),
            implementations,
            name: NODE_INTERFACE_NAME.to_string(),
        }));
        Ok(())
    }

    fn add_interface(&mut self, file_path: &Path, def: &ast::InterfaceTypeDefinition) -> Result<()> {
        let def_location = schema_location(file_path, def.position);
        self.check_for_conflicting_definition(&def.name, &def_location)?;

        let mut directives = Directive::from_ast(file_path, &def.directives);
        let mut field_sources = vec![(file_path, def.fields.as_slice())];
        for (ext_path, ext) in self.extensions.for_name(&def.name) {
            if let ast::Definition::Interface(ext) = ext {
                directives.extend(Directive::from_ast(ext_path, &ext.directives));
                field_sources.push((ext_path.as_path(), ext.fields.as_slice()));
            }
        }
        let fields = self.build_fields(&def.name, field_sources)?;

        let implementations = self.implementors.get(&def.name).cloned().unwrap_or_default();
        let (every_type_implements_node, no_type_implements_node) =
            self.node_coverage(&implementations);

        self.insert(Definition::Interface(InterfaceType {
            def_location,
            description: def.description.clone(),
            directives,
            every_type_implements_node,
            fields,
            implementations,
            name: def.name.to_string(),
            no_type_implements_node,
        }));
        Ok(())
    }

    fn add_union(&mut self, file_path: &Path, def: &ast::UnionTypeDefinition) -> Result<()> {
        let def_location = schema_location(file_path, def.position);
        self.check_for_conflicting_definition(&def.name, &def_location)?;

        let mut directives = Directive::from_ast(file_path, &def.directives);
        let mut type_names: Vec<String> = def.types.iter().map(|t| t.name.to_string()).collect();
        for (ext_path, ext) in self.extensions.for_name(&def.name) {
            if let ast::Definition::Union(ext) = ext {
                directives.extend(Directive::from_ast(ext_path, &ext.directives));
                type_names.extend(ext.types.iter().map(|t| t.name.to_string()));
            }
        }

        for member in &type_names {
            push_unique(self.union_memberships.entry(member.to_string()).or_default(), &def.name);
        }
        let (every_type_implements_node, no_type_implements_node) = self.node_coverage(&type_names);

        self.insert(Definition::Union(UnionType {
            def_location,
            description: def.description.clone(),
            directives,
            every_type_implements_node,
            name: def.name.to_string(),
            no_type_implements_node,
            type_names,
        }));
        Ok(())
    }

    fn add_input(&mut self, file_path: &Path, def: &ast::InputObjectTypeDefinition) -> Result<()> {
        let def_location = schema_location(file_path, def.position);
        self.check_for_conflicting_definition(&def.name, &def_location)?;

        let mut directives = Directive::from_ast(file_path, &def.directives);
        let mut field_sources = vec![(file_path, def.fields.as_slice())];
        for (ext_path, ext) in self.extensions.for_name(&def.name) {
            if let ast::Definition::InputObject(ext) = ext {
                directives.extend(Directive::from_ast(ext_path, &ext.directives));
                field_sources.push((ext_path.as_path(), ext.fields.as_slice()));
            }
        }

        for (source_path, fields) in &field_sources {
            for field in fields.iter() {
                let location = || loc::FilePosition::from_ast_pos(source_path, field.position);
                if !field.arguments.is_empty() {
                    return Err(SchemaBuildError::InputFieldWithArguments {
                        input_name: def.name.to_string(),
                        field_name: field.name.to_string(),
                        location: location(),
                    });
                }
                if matches!(
                    field.field_type.nullable(),
                    ast::TypeAnnotation::NodeConnection(_)
                        | ast::TypeAnnotation::ScalarConnection(_)
                        | ast::TypeAnnotation::ObjectConnection(_)
                        | ast::TypeAnnotation::Edge(_)
                ) {
                    return Err(SchemaBuildError::InputFieldWithConnection {
                        input_name: def.name.to_string(),
                        field_name: field.name.to_string(),
                        location: location(),
                    });
                }
            }
        }
        let arguments = self.build_fields(&def.name, field_sources)?;

        self.insert(Definition::Input(InputType {
            arguments,
            def_location,
            description: def.description.clone(),
            directives,
            name: def.name.to_string(),
        }));
        Ok(())
    }

    fn add_mutation(&mut self, file_path: &Path, def: &ast::MutationDefinition) -> Result<()> {
        let def_location = schema_location(file_path, def.position);
        self.check_for_conflicting_definition(&def.name, &def_location)?;

        let arguments = self.build_arguments(&def.name, file_path, &def.arguments)?;
        let fields = self.build_fields(&def.name, vec![(file_path, def.fields.as_slice())])?;

        self.insert(Definition::Mutation(MutationType {
            arguments,
            def_location,
            description: def.description.clone(),
            directives: Directive::from_ast(file_path, &def.directives),
            fields,
            name: def.name.to_string(),
        }));
        Ok(())
    }

    fn add_filter(&mut self, file_path: &Path, def: &ast::FilterDefinition) -> Result<()> {
        let name = format!("Filter#{}", print_type_annotation(&def.target));
        let def_location = schema_location(file_path, def.position);
        self.check_for_conflicting_definition(&name, &def_location)?;

        let target = self.classify(&def.target);
        self.insert(Definition::Filter(FilterType {
            conditions: def.conditions.clone(),
            def_location,
            name,
            target,
        }));
        Ok(())
    }

    fn add_order(&mut self, file_path: &Path, def: &ast::OrderDefinition) -> Result<()> {
        let name = format!("Order#{}", print_type_annotation(&def.target));
        let def_location = schema_location(file_path, def.position);
        self.check_for_conflicting_definition(&name, &def_location)?;

        let target = self.classify(&def.target);
        self.insert(Definition::Order(OrderType {
            def_location,
            expressions: def.expressions.clone(),
            name,
            target,
        }));
        Ok(())
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn check_for_conflicting_definition(
        &self,
        name: &str,
        def_location: &loc::SchemaDefLocation,
    ) -> Result<()> {
        if let Some(conflicting_def) = self.definitions.get(name) {
            return Err(SchemaBuildError::DuplicateDefinition {
                name: name.to_string(),
                def1: conflicting_def.def_location().clone(),
                def2: def_location.clone(),
            });
        }
        Ok(())
    }

    fn classify(&self, annotation: &ast::TypeAnnotation) -> FieldKind {
        field_classifier::classify(annotation, &|name: &str| {
            BUILTIN_SCALAR_NAMES.contains(&name)
                || matches!(
                    self.definitions.get(name),
                    Some(Definition::Scalar(_)) | Some(Definition::Enum(_)),
                )
        })
    }

    fn build_arguments(
        &self,
        owner_name: &str,
        file_path: &Path,
        args: &[ast::InputValueDefinition],
    ) -> Result<Vec<Argument>> {
        let mut arguments: Vec<Argument> = Vec::with_capacity(args.len());
        for arg in args {
            let argument = Argument {
                arguments: vec![],
                def_location: schema_location(file_path, arg.position),
                default_value: arg.default_value.clone(),
                description: arg.description.clone(),
                directives: Directive::from_ast(file_path, &arg.directives),
                is_required: field_classifier::is_required(&arg.value_type),
                kind: self.classify(&arg.value_type),
                name: arg.name.to_string(),
            };
            check_for_conflicting_field(owner_name, &arguments, &argument)?;
            arguments.push(argument);
        }
        Ok(arguments)
    }

    /// Builds the fields of `owner_name` from its definition and any
    /// extensions, rejecting duplicate names across all of them.
    fn build_fields(
        &self,
        owner_name: &str,
        sources: Vec<(&Path, &[ast::FieldDefinition])>,
    ) -> Result<Vec<Field>> {
        let mut fields: Vec<Field> = vec![];
        for (file_path, field_defs) in sources {
            for field_def in field_defs {
                let field = Field {
                    arguments: self.build_arguments(
                        &format!("{owner_name}.{}", field_def.name),
                        file_path,
                        &field_def.arguments,
                    )?,
                    def_location: schema_location(file_path, field_def.position),
                    default_value: None,
                    description: field_def.description.clone(),
                    directives: Directive::from_ast(file_path, &field_def.directives),
                    is_required: field_classifier::is_required(&field_def.field_type),
                    kind: self.classify(&field_def.field_type),
                    name: field_def.name.to_string(),
                };
                check_for_conflicting_field(owner_name, &fields, &field)?;
                log::trace!(
                    "Classified `{owner_name}.{}` as {}",
                    field.name,
                    field.kind.label(),
                );
                fields.push(field);
            }
        }
        Ok(fields)
    }

    fn insert(&mut self, def: Definition) {
        log::trace!("Defined {} `{}`", def.kind_name(), def.name());
        self.definitions.insert(def.name().to_string(), def);
    }

    /// Returns `(every, none)`: whether all of (at least one of) `type_names`
    /// implement `Node`, and whether none of them do.
    fn node_coverage(&self, type_names: &[String]) -> (bool, bool) {
        let node_count = type_names
            .iter()
            .filter(|name| {
                matches!(
                    self.definitions.get(name.as_str()),
                    Some(Definition::Type(def)) if def.implements_node,
                )
            })
            .count();
        (!type_names.is_empty() && node_count == type_names.len(), node_count == 0)
    }
}

fn check_for_conflicting_field(owner_name: &str, existing: &[Field], field: &Field) -> Result<()> {
    if let Some(conflicting_field) = existing.iter().find(|f| f.name == field.name) {
        return Err(SchemaBuildError::DuplicateFieldDefinition {
            type_name: owner_name.to_string(),
            field_name: field.name.to_string(),
            def1: conflicting_field.def_location.clone(),
            def2: field.def_location.clone(),
        });
    }
    Ok(())
}

fn push_unique(names: &mut Vec<String>, name: &str) {
    if !names.iter().any(|existing| existing == name) {
        names.push(name.to_string());
    }
}

fn schema_location(file_path: &Path, pos: Option<ast::AstPos>) -> loc::SchemaDefLocation {
    loc::SchemaDefLocation::Schema(loc::FilePosition::from_ast_pos(file_path, pos))
}
