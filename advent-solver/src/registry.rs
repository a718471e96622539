//! Day-keyed registry of solver factories
//!
//! The registry is a closed table built once at startup: every day number
//! maps to a factory that parses input and returns a ready instance.
//! Solvers get into the table either through an explicit
//! [`RegistryBuilder::register`] call or by submitting a [`SolverPlugin`]
//! through [`inventory`], which the binary collects with
//! [`RegistryBuilder::register_all_plugins`]. There is no runtime name
//! resolution anywhere: an unregistered day is a plain lookup miss.

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

/// Days on the calendar (1-25)
pub const DAYS: usize = 25;

/// Flat slot index for a day, `None` outside 1..=25.
#[inline]
fn slot(day: u8) -> Option<usize> {
    (1..=DAYS as u8).contains(&day).then(|| (day - 1) as usize)
}

/// Factory producing a parsed solver instance from raw input.
pub type SolverFactory =
    Box<dyn Fn(&str) -> Result<Box<dyn DynSolver>, ParseError> + Send + Sync>;

/// Builder assembling the day table before it is frozen into a
/// [`DayRegistry`].
///
/// # Example
///
/// ```
/// use advent_solver::{ParseError, RegistryBuilder, SolveError, Solver, register_day};
///
/// struct Echo;
///
/// impl Solver for Echo {
///     type Parsed = String;
///
///     fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
///         Ok(input.to_string())
///     }
///
///     fn part_one(parsed: &Self::Parsed) -> Result<String, SolveError> {
///         Ok(parsed.clone())
///     }
///
///     fn part_two(parsed: &Self::Parsed) -> Result<String, SolveError> {
///         Ok(parsed.chars().rev().collect())
///     }
/// }
///
/// let mut builder = RegistryBuilder::new();
/// register_day!(builder, Echo, 4);
/// let registry = builder.build();
/// assert!(registry.contains(4));
/// ```
pub struct RegistryBuilder {
    slots: Vec<Option<SolverFactory>>,
}

impl RegistryBuilder {
    /// Create a builder with every day unassigned.
    pub fn new() -> Self {
        Self {
            slots: (0..DAYS).map(|_| None).collect(),
        }
    }

    /// Register a factory for a day.
    ///
    /// Fails when the day is outside the calendar or already taken.
    pub fn register<F>(mut self, day: u8, factory: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&str) -> Result<Box<dyn DynSolver>, ParseError> + Send + Sync + 'static,
    {
        let index = slot(day).ok_or(RegistrationError::InvalidDay(day))?;
        if self.slots[index].is_some() {
            return Err(RegistrationError::DuplicateDay(day));
        }
        self.slots[index] = Some(Box::new(factory));
        Ok(self)
    }

    /// Register every solver submitted through [`inventory`].
    pub fn register_all_plugins(mut self) -> Result<Self, RegistrationError> {
        for plugin in inventory::iter::<SolverPlugin>() {
            self = plugin.solver.register_with(self, plugin.day)?;
        }
        Ok(self)
    }

    /// Freeze the table.
    pub fn build(self) -> DayRegistry {
        DayRegistry { slots: self.slots }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable day-to-factory table.
pub struct DayRegistry {
    slots: Vec<Option<SolverFactory>>,
}

impl DayRegistry {
    /// Parse `input` with the solver registered for `day`.
    pub fn create_solver(&self, day: u8, input: &str) -> Result<Box<dyn DynSolver>, SolverError> {
        let index = slot(day).ok_or(SolverError::InvalidDay(day))?;
        let factory = self.slots[index]
            .as_ref()
            .ok_or(SolverError::NotFound(day))?;
        factory(input).map_err(SolverError::Parse)
    }

    /// Registered days in calendar order.
    pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(index, _)| index as u8 + 1)
    }

    /// Whether a solver is registered for `day`.
    pub fn contains(&self, day: u8) -> bool {
        slot(day).is_some_and(|index| self.slots[index].is_some())
    }

    /// Number of registered days.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether no day is registered.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }
}

/// Type-erased self-registration, so solvers with different parsed types
/// can sit in one plugin list.
///
/// Blanket-implemented for every [`Solver`]; nothing implements this by
/// hand.
pub trait RegisterableSolver: Sync {
    /// Register this solver with the builder for the given day.
    fn register_with(
        &self,
        builder: RegistryBuilder,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
    S::Parsed: 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register(day, move |input: &str| {
            Ok(Box::new(SolverInstance::<S>::new(day, input)?))
        })
    }
}

/// A solver submitted for startup registration.
///
/// # Example
///
/// ```no_run
/// use advent_solver::{ParseError, SolveError, Solver, SolverPlugin};
///
/// struct Day9;
///
/// impl Solver for Day9 {
///     type Parsed = ();
///
///     fn parse(_: &str) -> Result<Self::Parsed, ParseError> {
///         Ok(())
///     }
///
///     fn part_one(_: &Self::Parsed) -> Result<String, SolveError> {
///         Ok("0".into())
///     }
///
///     fn part_two(_: &Self::Parsed) -> Result<String, SolveError> {
///         Ok("0".into())
///     }
/// }
///
/// inventory::submit! {
///     SolverPlugin { day: 9, solver: &Day9 }
/// }
/// ```
pub struct SolverPlugin {
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
}

// Enable plugin collection via inventory
inventory::collect!(SolverPlugin);

/// Register a solver type with a builder without going through the plugin
/// list; mostly useful in tests.
#[macro_export]
macro_rules! register_day {
    ($builder:expr, $solver:ty, $day:expr) => {
        $builder = $builder
            .register($day, move |input: &str| {
                Ok(Box::new($crate::SolverInstance::<$solver>::new(
                    $day, input,
                )?))
            })
            .expect("failed to register solver");
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::solver::Part;

    struct Sum;

    impl Solver for Sum {
        type Parsed = Vec<i64>;

        fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
            input
                .lines()
                .map(|line| {
                    line.parse()
                        .map_err(|_| ParseError::InvalidFormat(format!("bad integer {line:?}")))
                })
                .collect()
        }

        fn part_one(parsed: &Self::Parsed) -> Result<String, SolveError> {
            Ok(parsed.iter().sum::<i64>().to_string())
        }

        fn part_two(parsed: &Self::Parsed) -> Result<String, SolveError> {
            Ok(parsed.iter().product::<i64>().to_string())
        }
    }

    #[test]
    fn registered_day_round_trips() {
        let registry = RegistryBuilder::new()
            .register(3, |input| Ok(Box::new(SolverInstance::<Sum>::new(3, input)?)))
            .unwrap()
            .build();

        let solver = registry.create_solver(3, "1\n2\n3").unwrap();
        assert_eq!(solver.day(), 3);
        assert_eq!(solver.solve(Part::One).unwrap().answer, "6");
        assert_eq!(solver.solve(Part::Two).unwrap().answer, "6");
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let builder = RegistryBuilder::new()
            .register(5, |input| Ok(Box::new(SolverInstance::<Sum>::new(5, input)?)))
            .unwrap();
        let result = builder.register(5, |input| {
            Ok(Box::new(SolverInstance::<Sum>::new(5, input)?))
        });
        assert!(matches!(result, Err(RegistrationError::DuplicateDay(5))));
    }

    #[test]
    fn out_of_calendar_days_are_rejected() {
        for day in [0u8, 26, 200] {
            let result = RegistryBuilder::new().register(day, |input| {
                Ok(Box::new(SolverInstance::<Sum>::new(0, input)?))
            });
            assert!(matches!(result, Err(RegistrationError::InvalidDay(d)) if d == day));
        }
    }

    #[test]
    fn missing_day_lookup_fails_cleanly() {
        let registry = RegistryBuilder::new().build();
        assert!(matches!(
            registry.create_solver(12, ""),
            Err(SolverError::NotFound(12))
        ));
        assert!(matches!(
            registry.create_solver(0, ""),
            Err(SolverError::InvalidDay(0))
        ));
    }

    #[test]
    fn parse_failures_surface_from_the_factory() {
        let mut builder = RegistryBuilder::new();
        register_day!(builder, Sum, 2);
        let registry = builder.build();
        assert!(matches!(
            registry.create_solver(2, "not a number"),
            Err(SolverError::Parse(_))
        ));
    }

    #[test]
    fn days_iterates_in_calendar_order() {
        let mut builder = RegistryBuilder::new();
        register_day!(builder, Sum, 20);
        register_day!(builder, Sum, 4);
        register_day!(builder, Sum, 11);
        let registry = builder.build();
        assert_eq!(registry.days().collect::<Vec<_>>(), vec![4, 11, 20]);
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
        assert!(registry.contains(11));
        assert!(!registry.contains(12));
    }
}
