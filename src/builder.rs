use crate::engine::Strategy;
use crate::{DpEngine, Recurrence};

pub struct DpEngineBuilder<P: Recurrence> {
    problem: P,
    strategy: Option<Strategy>,
}

impl<P: Recurrence> DpEngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            strategy: None,
        }
    }
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }
    pub fn build(self) -> DpEngine<P> {
        match self.strategy {
            Some(s) => DpEngine::with_strategy(self.problem, s),
            None => DpEngine::new(self.problem),
        }
    }
}
