use std::any::Any;
use std::rc::Rc;

use smallvec::SmallVec;

/// Dependency lists are short in practice; keep the common case inline.
pub type DepList = SmallVec<[Dep; 4]>;

/// One comparison value in a dependency list.
///
/// Sameness is shallow: primitives and strings compare by value, `Obj` by
/// pointer identity (`Rc::ptr_eq`). The contents behind an `Obj` are never
/// inspected, so two structurally equal values in different allocations
/// count as different.
#[derive(Clone)]
pub enum Dep {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Rc<str>),
    Obj(Rc<dyn Any>),
}

impl Dep {
    /// Wrap a shared value compared by identity, not contents.
    pub fn obj<T: 'static>(value: Rc<T>) -> Self {
        Dep::Obj(value)
    }

    pub fn same(&self, other: &Dep) -> bool {
        match (self, other) {
            (Dep::Bool(a), Dep::Bool(b)) => a == b,
            (Dep::Int(a), Dep::Int(b)) => a == b,
            // bitwise: NaN is same as NaN, +0.0 is not -0.0
            (Dep::Float(a), Dep::Float(b)) => a.to_bits() == b.to_bits(),
            (Dep::Str(a), Dep::Str(b)) => a == b,
            (Dep::Obj(a), Dep::Obj(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Dep {
    fn from(v: bool) -> Self {
        Dep::Bool(v)
    }
}

impl From<i32> for Dep {
    fn from(v: i32) -> Self {
        Dep::Int(v.into())
    }
}

impl From<i64> for Dep {
    fn from(v: i64) -> Self {
        Dep::Int(v)
    }
}

impl From<u32> for Dep {
    fn from(v: u32) -> Self {
        Dep::Int(v.into())
    }
}

impl From<f32> for Dep {
    fn from(v: f32) -> Self {
        Dep::Float(v.into())
    }
}

impl From<f64> for Dep {
    fn from(v: f64) -> Self {
        Dep::Float(v)
    }
}

impl From<&str> for Dep {
    fn from(v: &str) -> Self {
        Dep::Str(v.into())
    }
}

impl From<String> for Dep {
    fn from(v: String) -> Self {
        Dep::Str(v.into())
    }
}

impl<T: 'static> From<Rc<T>> for Dep {
    fn from(v: Rc<T>) -> Self {
        Dep::Obj(v)
    }
}

/// Builds a [`DepList`] from anything with a `Dep` conversion.
///
/// `deps![]` is the "run once" list; after the first pass an empty list
/// never counts as changed.
#[macro_export]
macro_rules! deps {
    () => { $crate::deps::DepList::new() };
    ($($d:expr),+ $(,)?) => {{
        let mut list = $crate::deps::DepList::new();
        $(list.push($crate::deps::Dep::from($d));)+
        list
    }};
}
