//! Walking the AST to execute the program.
//!
//! This is where the program is effectively being executed. This module brings
//! all other submodules together.

use num_bigint::BigInt;
use Value::*;

use super::env::{Env, Globals};
use super::format::substitute;
use super::{Binding, Fail, Function, Streams, Value};
use crate::ast::{Body, Expr, ExprKind, NumberKind, Stmt, StmtKind};

/// Interpreter for our language.
pub struct Interpreter<'g, 'p, 'io> {
    /// Global environment.
    globals: &'g Globals<'p>,
    /// Input and output of the program.
    streams: Streams<'io>,
}

impl<'g, 'p, 'io> Interpreter<'g, 'p, 'io> {
    /// Creates a new interpreter over a loaded program.
    pub fn new(globals: &'g Globals<'p>, streams: Streams<'io>) -> Self {
        Self { globals, streams }
    }

    /// Calls the `main` function without arguments.
    pub fn call_main(&mut self) -> Result<Value, Fail> {
        match self.globals.get("main") {
            Some(Binding::Fun(main)) => self.call(*main, vec![]),
            Some(Binding::Val(_)) => Err(Fail::main_not_a_function()),
            None => Err(Fail::no_main()),
        }
    }

    /// Flushes the output of the program.
    pub fn flush(&mut self) -> Result<(), Fail> {
        self.streams.output.flush()?;
        Ok(())
    }

    /// Calls a function on already evaluated arguments.
    pub fn call(&mut self, f: Function<'p>, args: Vec<Value>) -> Result<Value, Fail> {
        log::debug!("calling {}({:?})", f.name(), args);
        match f {
            Function::Builtin(builtin) => builtin.call(args, &mut self.streams),
            Function::User(fun) => {
                if fun.arity() != args.len() {
                    return Err(Fail::arity(fun.name.as_str(), fun.arity(), args.len()));
                }
                let mut env = Env::fresh(self.globals, &fun.params, args);
                self.visit_body(&fun.body, &mut env)
            }
        }
    }

    /// Executes the statements of a body in order, recording the result of
    /// each as the last produced value.
    ///
    /// Returns the last produced value.
    fn visit_body(&mut self, body: &Body, env: &mut Env<'g, 'p>) -> Result<Value, Fail> {
        for stmt in &body.stmts {
            let value = self.visit_stmt(stmt, env)?;
            env.set_last(value);
        }
        Ok(env.last())
    }

    /// Executes a statement.
    fn visit_stmt(&mut self, stmt: &Stmt, env: &mut Env<'g, 'p>) -> Result<Value, Fail> {
        log::trace!("executing statement at {:?}", stmt.span);
        match &stmt.kind {
            StmtKind::LineS(expr) => self.visit_expr(expr, env),
            StmtKind::DoS(body) => self.visit_body(body, env),
            StmtKind::IfS {
                branches,
                else_body,
            } => {
                for branch in branches {
                    if self.visit_expr(&branch.cond, env)?.truth() {
                        return self.visit_body(&branch.body, env);
                    }
                }
                match else_body {
                    Some(body) => self.visit_body(body, env),
                    None => Ok(env.last()),
                }
            }
        }
    }

    /// Evaluates an expression.
    fn visit_expr(&mut self, expr: &Expr, env: &mut Env<'g, 'p>) -> Result<Value, Fail> {
        match &expr.kind {
            ExprKind::CallE { name, args } => {
                let f = match env.get(name.as_str()) {
                    Some(Binding::Fun(f)) => f,
                    Some(Binding::Val(_)) => {
                        return Err(Fail::not_callable(name.as_str()).at(expr.span))
                    }
                    None => return Err(Fail::undefined_function(name.as_str()).at(expr.span)),
                };
                let args = args
                    .iter()
                    .map(|arg| self.visit_expr(arg, env))
                    .collect::<Result<Vec<_>, _>>()?;
                self.call(f, args).map_err(|fail| fail.or_span(expr.span))
            }
            ExprKind::AssignE(name, rhs) => {
                let value = self.visit_expr(rhs, env)?;
                env.assign(name, value.clone())?;
                Ok(value)
            }
            ExprKind::NameE(name) => env.value(name),
            ExprKind::StringE(lit) if lit.is_format() => {
                let formatted = substitute(&lit.content, &lit.source_form(), |key| {
                    match env.get(key) {
                        Some(Binding::Val(value)) => Some(value),
                        _ => None,
                    }
                })
                .map_err(|fail| fail.at(expr.span))?;
                Ok(StrV(formatted))
            }
            ExprKind::StringE(lit) => Ok(StrV(lit.content.clone())),
            ExprKind::NumberE(NumberKind::Dec, text) => {
                let digits = text.replace('_', "");
                let value = digits
                    .parse::<BigInt>()
                    .unwrap_or_else(|_| panic!("parser internal error: invalid integer {text}"));
                Ok(IntV(value))
            }
            ExprKind::NumberE(kind, _) => Err(Fail::not_implemented(kind).at(expr.span)),
        }
    }
}
