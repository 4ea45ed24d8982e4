//! Statement interpreter.
//!
//! A single forward pass over the program. Each statement either succeeds or
//! aborts the run; nothing is retried or rolled back, so bindings created
//! before a failure stay visible through [`Interpreter::status`].

mod builder;

pub use builder::InterpreterBuilder;

use rune_ir::{Operation, Program, Realm, Stmt, StmtKind};

use crate::engine::Engine;
use crate::environment::{BindingStatus, Environment};
use crate::errors::{input_unavailable, unknown_statement, EvalError};
use crate::history::OperationObserver;
use crate::io::InputProvider;
use crate::sink::{Event, PresentationSink};

/// Runs spell programs against one environment and one engine.
pub struct Interpreter {
    pub(crate) env: Environment,
    pub(crate) engine: Engine,
    pub(crate) input: Box<dyn InputProvider>,
    pub(crate) sink: Box<dyn PresentationSink>,
    pub(crate) observer: Option<Box<dyn OperationObserver>>,
}

impl Interpreter {
    /// Interpreter with no input, a silent sink and no observer.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Execute every statement in order.
    ///
    /// Reports `Started`, then `Succeeded` or `Failed(message)` to the sink.
    /// The first failing statement aborts the run and its error, tagged with
    /// the statement's span, is returned.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.len()))]
    pub fn execute(&mut self, program: &Program) -> Result<(), EvalError> {
        self.sink.notify(Event::Started);
        for stmt in &program.statements {
            if let Err(err) = self.execute_statement(stmt) {
                let err = err.with_span(stmt.span);
                tracing::warn!(statement = %stmt, error = %err, "spell aborted");
                self.sink.notify(Event::Failed(err.message.clone()));
                return Err(err);
            }
        }
        self.sink.notify(Event::Succeeded);
        Ok(())
    }

    /// Execute a single statement.
    pub fn execute_statement(&mut self, stmt: &Stmt) -> Result<(), EvalError> {
        tracing::trace!(statement = %stmt, "executing");
        match &stmt.kind {
            StmtKind::Invoke { names, realm } => self.invoke(names, *realm),
            StmtKind::Channel { name } => {
                let value = self.env.get(name)?;
                if let Some(observer) = &self.observer {
                    observer.channeled(name, &value);
                }
                self.engine.channel(value);
                self.sink.notify(Event::Channeled { name: name.clone() });
                Ok(())
            }
            StmtKind::Weave { name } => {
                let value = self.env.get(name)?;
                if let Some(observer) = &self.observer {
                    observer.woven(name, &value);
                }
                self.engine.weave(value);
                self.sink.notify(Event::Woven { name: name.clone() });
                Ok(())
            }
            StmtKind::Manifest {
                operation,
                operands,
                result,
            } => self.manifest(*operation, operands, result),
            StmtKind::Speak { name, target } => {
                let value = self.env.get(name)?;
                self.sink.notify(Event::Spoke {
                    name: name.clone(),
                    value,
                    target: target.clone(),
                });
                Ok(())
            }
            StmtKind::Conditional { .. } | StmtKind::WhileLoop { .. } => {
                Err(unknown_statement(stmt.kind.tag()))
            }
        }
    }

    fn invoke(&mut self, names: &[String], realm: Realm) -> Result<(), EvalError> {
        for name in names {
            let prompt = self.sink.invocation_prompt(name, realm);
            let raw = self
                .input
                .read_line(&prompt)
                .map_err(|e| input_unavailable(name, e))?;
            let value = self.env.summon(name, &raw, realm);
            self.sink.notify(Event::Summoned {
                name: name.clone(),
                realm,
                value,
            });
        }
        Ok(())
    }

    fn manifest(
        &mut self,
        operation: Operation,
        operands: &[String],
        result: &str,
    ) -> Result<(), EvalError> {
        let staged = self
            .observer
            .is_some()
            .then(|| self.engine.staged().clone());
        let value = self.engine.evaluate(operation)?;

        if let (Some(observer), Some(staged)) = (&self.observer, staged) {
            if let Some(left) = &staged.left {
                let right = if operation.is_unary() {
                    None
                } else {
                    staged.right.as_ref()
                };
                observer.manifested(operation, left, right, &value);
            }
        }

        let realm = self.infer_result_realm(operands);
        tracing::debug!(%operation, result, %realm, %value, "manifested");
        self.env.bind(result, value.clone(), realm);
        self.sink.notify(Event::Manifested {
            operation,
            result: result.to_string(),
            value,
        });
        Ok(())
    }

    /// Realm of a computed result: SPIRIT if any operand is SPIRIT, else
    /// SHADOW if any is SHADOW, else MORTAL. Names with no binding are
    /// ignored.
    pub fn infer_result_realm(&self, operands: &[String]) -> Realm {
        let realms: Vec<Realm> = operands
            .iter()
            .filter_map(|name| self.env.get_realm(name).ok())
            .collect();
        if realms.contains(&Realm::Spirit) {
            Realm::Spirit
        } else if realms.contains(&Realm::Shadow) {
            Realm::Shadow
        } else {
            Realm::Mortal
        }
    }

    /// Every live binding, in creation order.
    pub fn status(&self) -> Vec<BindingStatus> {
        self.env.status()
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
