//! The mapper façade.

use std::collections::HashMap;

use graft_accessor::{
    AccessError, EntityMapping, FieldAccessor, Materialize, StoreMaterializer, TargetSet,
};
use graft_core::{EntityRef, Properties};
use graft_graph::GraphStore;
use graft_registry::{AccessorKind, DefaultNaming, Registry, RelationshipNaming};

use crate::error::{MapperError, MapperResult};

/// Maps registered entity types onto a graph store.
///
/// The mapper resolves every node-backed type's relationship fields once at
/// construction and routes field reads and writes through the resulting
/// accessors. The registry is shared; the store is owned.
pub struct Mapper<'r, S: GraphStore, M: Materialize = StoreMaterializer> {
    /// The registry (shared).
    registry: &'r Registry,
    /// The backing store.
    store: S,
    /// Turns store records into entity handles.
    materializer: M,
    /// Resolved relationship accessors per node-backed type.
    mappings: HashMap<String, EntityMapping>,
}

impl<'r, S: GraphStore> Mapper<'r, S, StoreMaterializer> {
    /// Create a mapper with the default naming policy and materializer.
    pub fn new(registry: &'r Registry, store: S) -> MapperResult<Self> {
        Self::with_parts(registry, store, StoreMaterializer, &DefaultNaming)
    }
}

impl<'r, S: GraphStore, M: Materialize> Mapper<'r, S, M> {
    /// Create a mapper with explicit collaborators.
    ///
    /// Resolution fails on the first misdeclared relationship field, so a
    /// mapper that constructs successfully never hits a classification
    /// error afterwards.
    pub fn with_parts(
        registry: &'r Registry,
        store: S,
        materializer: M,
        naming: &dyn RelationshipNaming,
    ) -> MapperResult<Self> {
        let mut mappings = HashMap::new();
        for def in registry.node_types() {
            let mapping = EntityMapping::resolve(def, naming)?;
            mappings.insert(def.name.clone(), mapping);
        }
        Ok(Self {
            registry,
            store,
            materializer,
            mappings,
        })
    }

    /// Get the registry.
    pub fn registry(&self) -> &Registry {
        self.registry
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a mutable reference to the store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Create a node for a registered node-backed type.
    ///
    /// Property values are stored as given, without validation.
    pub fn create(&mut self, type_name: &str, properties: Properties) -> MapperResult<EntityRef> {
        let def = match self.registry.get_type(type_name) {
            Some(def) => def,
            None => return Err(MapperError::unknown_type(type_name)),
        };
        if !def.is_node() {
            return Err(MapperError::not_node_backed(&def.name));
        }
        let id = self.store.create_node(&def.name, properties)?;
        Ok(EntityRef::node(&def.name, id))
    }

    /// Read the related entity of a single-valued field.
    pub fn read_single(&self, owner: &EntityRef, field: &str) -> MapperResult<Option<EntityRef>> {
        let accessor = self.accessor(owner.type_name(), field)?;
        let value = accessor.read_single(&self.store, &self.materializer, owner)?;
        Ok(value)
    }

    /// Read the related entities of a many-valued field.
    pub fn read_many(&self, owner: &EntityRef, field: &str) -> MapperResult<TargetSet> {
        let accessor = self.accessor(owner.type_name(), field)?;
        let targets = accessor.read_many(&self.store, &self.materializer, owner)?;
        Ok(targets)
    }

    /// Set or clear the related entity of a single-valued field.
    pub fn write_single(
        &mut self,
        owner: &EntityRef,
        field: &str,
        value: Option<&EntityRef>,
    ) -> MapperResult<()> {
        let accessor = field_accessor(self.registry, &self.mappings, owner.type_name(), field)?;
        accessor.write_single(&mut self.store, owner, value)?;
        Ok(())
    }

    /// Replace the related entities of a many-valued field.
    pub fn write_many(
        &mut self,
        owner: &EntityRef,
        field: &str,
        desired: &[EntityRef],
    ) -> MapperResult<()> {
        let accessor = field_accessor(self.registry, &self.mappings, owner.type_name(), field)?;
        accessor.write_many(&mut self.store, owner, desired)?;
        Ok(())
    }

    /// Relate the owner to a target through a relationship entity field.
    ///
    /// Creates the backing edge with the given properties and returns its
    /// handle, typed as the field's relationship entity type.
    pub fn relate(
        &mut self,
        owner: &EntityRef,
        field: &str,
        target: &EntityRef,
        properties: Properties,
    ) -> MapperResult<EntityRef> {
        let accessor = field_accessor(self.registry, &self.mappings, owner.type_name(), field)?;
        let binding = accessor.binding();
        if !matches!(accessor, FieldAccessor::WithAttributes(_)) {
            return Err(AccessError::unsupported_operation(
                &binding.entity,
                &binding.field,
                "relate requires a relationship entity field",
            )
            .into());
        }

        let owner_id = match owner.node_id() {
            Some(id) => id,
            None => return Err(AccessError::unbound_entity(owner.type_name()).into()),
        };
        let target_id = match target.node_id() {
            Some(id) => id,
            None => return Err(AccessError::unbound_entity(target.type_name()).into()),
        };
        if target_id == owner_id {
            return Err(AccessError::circular_reference(&binding.entity, &binding.field).into());
        }

        let edge_id = self
            .store
            .create_edge(owner_id, target_id, &binding.rel, properties)?;
        Ok(EntityRef::edge(&binding.target_type, edge_id))
    }

    /// The accessor kind a relationship field resolved to.
    pub fn accessor_kind(&self, type_name: &str, field: &str) -> MapperResult<AccessorKind> {
        let accessor = self.accessor(type_name, field)?;
        Ok(accessor.kind())
    }

    fn accessor(&self, type_name: &str, field: &str) -> MapperResult<&FieldAccessor> {
        field_accessor(self.registry, &self.mappings, type_name, field)
    }
}

/// Look up the resolved accessor for a field.
fn field_accessor<'m>(
    registry: &Registry,
    mappings: &'m HashMap<String, EntityMapping>,
    type_name: &str,
    field: &str,
) -> MapperResult<&'m FieldAccessor> {
    let mapping = match mappings.get(type_name) {
        Some(mapping) => mapping,
        None => {
            if registry.contains_type(type_name) {
                return Err(MapperError::not_node_backed(type_name));
            }
            return Err(MapperError::unknown_type(type_name));
        }
    };
    match mapping.accessor(field) {
        Some(accessor) => Ok(accessor),
        None => Err(MapperError::unknown_field(type_name, field)),
    }
}
