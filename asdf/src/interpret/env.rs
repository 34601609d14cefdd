//! Defining the environments in which the program executes.

use std::collections::HashMap;
use std::fmt;

use super::stdlib::{is_reserved, std_value, Builtin, STD_VALUES};
use super::{Binding, Fail, Function, Value};
use crate::ast::{FunDef, Ident, Program};

/// Name of the binding holding the last produced value.
pub const LAST: &str = "_";

/// Global environment: the standard library and the functions of the program.
///
/// Built once when the program is loaded, read-only afterwards.
pub struct Globals<'p> {
    /// Global bindings, indexed by name.
    bindings: HashMap<String, Binding<'p>>,
}

impl<'p> Globals<'p> {
    /// Global environment with only the standard library.
    pub fn std() -> Self {
        let mut bindings = HashMap::new();
        for builtin in Builtin::ALL {
            bindings.insert(
                builtin.name().to_string(),
                Binding::Fun(Function::Builtin(builtin)),
            );
        }
        for name in STD_VALUES {
            if let Some(value) = std_value(name) {
                bindings.insert(name.to_string(), Binding::Val(value));
            }
        }
        Self { bindings }
    }

    /// Registers the functions of `program` on top of the standard library.
    ///
    /// Functions and parameters may not be named after the standard library,
    /// and a function may only be defined once.
    pub fn load(program: &'p Program) -> Result<Self, Fail> {
        let mut globals = Self::std();
        for f in &program.funs {
            globals.define(f)?;
        }
        Ok(globals)
    }

    /// Registers a single function.
    fn define(&mut self, f: &'p FunDef) -> Result<(), Fail> {
        if is_reserved(f.name.as_str()) || self.bindings.contains_key(f.name.as_str()) {
            return Err(Fail::reserved(f.name.as_str()).at(f.name.span));
        }
        if let Some(param) = f.params.iter().find(|param| is_reserved(param.as_str())) {
            return Err(Fail::reserved(param.as_str()).at(param.span));
        }
        log::debug!("defining {}({})", f.name, f.params.len());
        self.bindings
            .insert(f.name.name.clone(), Binding::Fun(Function::User(f)));
        Ok(())
    }

    /// Gets a global binding.
    pub fn get(&self, name: &str) -> Option<&Binding<'p>> {
        self.bindings.get(name)
    }

    /// Is `name` bound to a function in the global environment?
    pub fn is_function(&self, name: &str) -> bool {
        matches!(self.bindings.get(name), Some(Binding::Fun(_)))
    }
}

impl fmt::Debug for Globals<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.bindings.keys()).finish()
    }
}

/// Environment of a single function call.
///
/// Owned by its call frame: assignments only ever change it, never the caller
/// or the global environment.
pub struct Env<'g, 'p> {
    /// Defining environment.
    globals: &'g Globals<'p>,
    /// Parameters and variables of the call.
    locals: HashMap<String, Value>,
}

impl<'g, 'p> Env<'g, 'p> {
    /// Creates the environment of a call: parameters bound to the arguments,
    /// and `_` bound to the first argument (empty if none).
    pub fn fresh(globals: &'g Globals<'p>, params: &[Ident], args: Vec<Value>) -> Self {
        let mut locals: HashMap<String, Value> = HashMap::new();
        locals.insert(LAST.to_string(), args.first().cloned().unwrap_or_default());
        for (param, arg) in params.iter().zip(args) {
            locals.insert(param.name.clone(), arg);
        }
        Self { globals, locals }
    }

    /// Looks a name up: variables of the call first, then global bindings.
    pub fn get(&self, name: &str) -> Option<Binding<'p>> {
        match self.locals.get(name) {
            Some(value) => Some(Binding::Val(value.clone())),
            None => self.globals.get(name).cloned(),
        }
    }

    /// Looks up the value a name is bound to.
    pub fn value(&self, name: &Ident) -> Result<Value, Fail> {
        match self.get(name.as_str()) {
            Some(Binding::Val(value)) => Ok(value),
            Some(Binding::Fun(_)) => Err(Fail::not_a_value(name.as_str()).at(name.span)),
            None => Err(Fail::undefined_name(name.as_str()).at(name.span)),
        }
    }

    /// Binds `name` to `value` in this environment.
    ///
    /// The standard library and the functions of the program cannot be
    /// overwritten.
    pub fn assign(&mut self, name: &Ident, value: Value) -> Result<(), Fail> {
        let name_str = name.as_str();
        if is_reserved(name_str)
            || (self.globals.is_function(name_str) && !self.locals.contains_key(name_str))
        {
            return Err(Fail::reserved(name_str).at(name.span));
        }
        self.locals.insert(name.name.clone(), value);
        Ok(())
    }

    /// The last produced value.
    pub fn last(&self) -> Value {
        self.locals.get(LAST).cloned().unwrap_or_default()
    }

    /// Records the last produced value.
    pub fn set_last(&mut self, value: Value) {
        self.locals.insert(LAST.to_string(), value);
    }
}

impl fmt::Debug for Env<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Env")
            .field("globals", self.globals)
            .field("locals", &self.locals)
            .finish()
    }
}
