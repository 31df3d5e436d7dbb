//! Partition
//!
//! A named source of a typed value. Identity is the name: two partitions
//! with the same name are the same partition for equality, hashing, and
//! coverage bookkeeping, regardless of what `kind` produces at `value()`
//! time.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::{GenError, GenResult};
use crate::value::Value;

/// How a partition's runtime value is produced.
#[derive(Clone)]
pub enum PartitionKind {
    /// Always yields the same value.
    Constant(Value),
    /// Invokes a producer closure on every `value()` call.
    Lazy(Arc<dyn Fn() -> Value + Send + Sync>),
    /// Cycles through a fixed, non-empty sequence. The cursor is atomic so
    /// concurrent callers each observe a distinct position modulo the
    /// sequence length.
    Cyclic {
        seq: Arc<Vec<Value>>,
        cursor: Arc<AtomicUsize>,
    },
}

impl fmt::Debug for PartitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionKind::Constant(v) => f.debug_tuple("Constant").field(v).finish(),
            PartitionKind::Lazy(_) => f.write_str("Lazy(..)"),
            PartitionKind::Cyclic { seq, .. } => {
                f.debug_struct("Cyclic").field("seq", seq).finish()
            }
        }
    }
}

/// A named equivalence partition belonging to exactly one parameter.
///
/// The optional `parent` is informational only: the name of the owning
/// parameter, recorded at attachment for diagnostics. It never participates
/// in equality, hashing, or ordering, and generation logic never reads it —
/// this avoids the Parameter-owns-Partition / Partition-refers-to-Parameter
/// ownership cycle without reaching for `Rc<RefCell<_>>` or a weak pointer.
#[derive(Clone)]
pub struct Partition {
    name: String,
    kind: PartitionKind,
    parent: Option<String>,
}

impl Partition {
    fn new(name: impl Into<String>, kind: PartitionKind) -> Self {
        Partition {
            name: name.into(),
            kind,
            parent: None,
        }
    }

    /// A partition that always evaluates to `value`.
    pub fn constant(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Partition::new(name, PartitionKind::Constant(value.into()))
    }

    /// A partition whose name is derived from the value's `Display` form.
    pub fn constant_named(value: impl Into<Value>) -> Self {
        let value = value.into();
        let name = value.to_string();
        Partition::new(name, PartitionKind::Constant(value))
    }

    /// A partition that invokes `producer` fresh on every `value()` call.
    pub fn lazy(
        name: impl Into<String>,
        producer: impl Fn() -> Value + Send + Sync + 'static,
    ) -> Self {
        Partition::new(name, PartitionKind::Lazy(Arc::new(producer)))
    }

    /// A partition that cycles through `values` in order, wrapping around.
    ///
    /// # Errors
    /// Returns [`GenError::InvalidArgument`] if `values` is empty.
    pub fn cyclic(name: impl Into<String>, values: Vec<Value>) -> GenResult<Self> {
        if values.is_empty() {
            return Err(GenError::InvalidArgument(format!(
                "cyclic partition '{}' requires at least one value",
                name.into()
            )));
        }
        Ok(Partition::new(
            name,
            PartitionKind::Cyclic {
                seq: Arc::new(values),
                cursor: Arc::new(AtomicUsize::new(0)),
            },
        ))
    }

    /// The identity of this partition.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The owning parameter's name, if this partition has been attached.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub(crate) fn attach_parent(&mut self, parameter_name: &str) {
        self.parent = Some(parameter_name.to_string());
    }

    /// Evaluate this partition's current value.
    ///
    /// Effectful for `Lazy` (invokes the producer) and `Cyclic` (advances
    /// the cursor atomically, mod the sequence length).
    pub fn value(&self) -> Value {
        match &self.kind {
            PartitionKind::Constant(v) => v.clone(),
            PartitionKind::Lazy(producer) => producer(),
            PartitionKind::Cyclic { seq, cursor } => {
                let len = seq.len();
                let idx = cursor.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |c| {
                    Some((c + 1) % len)
                });
                let idx = idx.unwrap_or(0);
                seq[idx].clone()
            }
        }
    }
}

impl fmt::Debug for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Partition")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("parent", &self.parent)
            .finish()
    }
}

impl PartialEq for Partition {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Partition {}

impl std::hash::Hash for Partition {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
