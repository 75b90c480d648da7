use std::cmp::Ordering;

use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{SimpleExpr, ValueType};
use sea_orm::{ColumnTrait, Condition, EntityTrait, ModelTrait, Value};

/// How a column is compared with the filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Eq,
    Ne,
    /// Text equality after lower-casing both sides
    EqIgnoreCase,
    Gt,
    Gte,
    Lt,
    Lte,
}

/// One `column <comparator> value` term of a [`Filter`].
#[derive(Debug, Clone)]
pub struct Criterion<C> {
    pub column: C,
    pub comparator: Comparator,
    pub value: Value,
}

/// Conjunction of [`Criterion`]s over the columns of one entity.
///
/// An empty filter matches every row.
///
/// ```ignore
/// let filter = Filter::new()
///     .eq_ignore_case(villa::Column::Name, "Pool View")
///     .gte(villa::Column::Rate, 100.0);
/// ```
#[derive(Debug, Clone)]
pub struct Filter<C> {
    criteria: Vec<Criterion<C>>,
}

impl<C> Default for Filter<C> {
    fn default() -> Self {
        Self {
            criteria: Vec::new(),
        }
    }
}

impl<C: ColumnTrait> Filter<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter with a single criterion.
    pub fn by(column: C, comparator: Comparator, value: impl Into<Value>) -> Self {
        Self::new().and(column, comparator, value)
    }

    pub fn and(mut self, column: C, comparator: Comparator, value: impl Into<Value>) -> Self {
        self.criteria.push(Criterion {
            column,
            comparator,
            value: value.into(),
        });
        self
    }

    pub fn eq(self, column: C, value: impl Into<Value>) -> Self {
        self.and(column, Comparator::Eq, value)
    }

    pub fn ne(self, column: C, value: impl Into<Value>) -> Self {
        self.and(column, Comparator::Ne, value)
    }

    pub fn eq_ignore_case(self, column: C, value: impl Into<String>) -> Self {
        self.and(column, Comparator::EqIgnoreCase, value.into())
    }

    pub fn gt(self, column: C, value: impl Into<Value>) -> Self {
        self.and(column, Comparator::Gt, value)
    }

    pub fn gte(self, column: C, value: impl Into<Value>) -> Self {
        self.and(column, Comparator::Gte, value)
    }

    pub fn lt(self, column: C, value: impl Into<Value>) -> Self {
        self.and(column, Comparator::Lt, value)
    }

    pub fn lte(self, column: C, value: impl Into<Value>) -> Self {
        self.and(column, Comparator::Lte, value)
    }

    pub fn criteria(&self) -> &[Criterion<C>] {
        &self.criteria
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// SQL form for `Select::filter`.
    pub fn into_condition(self) -> Condition {
        self.criteria
            .into_iter()
            .fold(Condition::all(), |condition, criterion| {
                condition.add(criterion.into_expr())
            })
    }

    /// Evaluate the filter against a loaded model.
    pub fn matches<M>(&self, model: &M) -> bool
    where
        M: ModelTrait,
        M::Entity: EntityTrait<Column = C>,
    {
        self.criteria
            .iter()
            .all(|criterion| criterion.accepts(&model.get(criterion.column)))
    }
}

impl<C: ColumnTrait> Criterion<C> {
    fn into_expr(self) -> SimpleExpr {
        let Criterion {
            column,
            comparator,
            value,
        } = self;

        match comparator {
            Comparator::Eq => column.eq(value),
            Comparator::Ne => column.ne(value),
            Comparator::Gt => column.gt(value),
            Comparator::Gte => column.gte(value),
            Comparator::Lt => column.lt(value),
            Comparator::Lte => column.lte(value),
            Comparator::EqIgnoreCase => lowered::eq(column, lowercase(&value).into()),
        }
    }

    fn accepts(&self, actual: &Value) -> bool {
        match self.comparator {
            Comparator::Eq => actual == &self.value,
            Comparator::Ne => actual != &self.value,
            Comparator::EqIgnoreCase => match (text(actual), text(&self.value)) {
                (Some(left), Some(right)) => left.to_lowercase() == right.to_lowercase(),
                _ => false,
            },
            Comparator::Gt => compare(actual, &self.value) == Some(Ordering::Greater),
            Comparator::Gte => matches!(
                compare(actual, &self.value),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            Comparator::Lt => compare(actual, &self.value) == Some(Ordering::Less),
            Comparator::Lte => matches!(
                compare(actual, &self.value),
                Some(Ordering::Less | Ordering::Equal)
            ),
        }
    }
}

mod lowered {
    use sea_orm::ColumnTrait;
    use sea_orm::sea_query::{Expr, ExprTrait, Func, SimpleExpr};

    /// `LOWER(column) = value`
    pub(super) fn eq<C: ColumnTrait>(column: C, value: String) -> SimpleExpr {
        Expr::expr(Func::lower(Expr::col(column))).eq(value)
    }
}

fn text(value: &Value) -> Option<String> {
    <String as ValueType>::try_from(value.clone()).ok()
}

fn lowercase(value: &Value) -> String {
    text(value).unwrap_or_default().to_lowercase()
}

fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    fn typed<T: ValueType + PartialOrd>(left: &Value, right: &Value) -> Option<Ordering> {
        let left = T::try_from(left.clone()).ok()?;
        let right = T::try_from(right.clone()).ok()?;
        left.partial_cmp(&right)
    }

    typed::<i32>(left, right)
        .or_else(|| typed::<i64>(left, right))
        .or_else(|| typed::<f64>(left, right))
        .or_else(|| typed::<DateTimeWithTimeZone>(left, right))
        .or_else(|| typed::<String>(left, right))
}
