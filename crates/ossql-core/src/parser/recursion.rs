//! Active rule tracking and recursion depth limiting.

use std::cell::RefCell;
use std::rc::Rc;

use super::Rule;

/// The stack of rules currently being recognized.
///
/// The stack is shared with the [`RuleGuard`]s it hands out so that a guard
/// can pop its rule on drop while the parser stays mutably borrowed.
#[derive(Debug)]
pub(crate) struct RuleStack {
    rules: Rc<RefCell<Vec<Rule>>>,
    max_depth: usize,
}

impl RuleStack {
    pub(crate) fn new(max_depth: usize) -> Self {
        Self {
            rules: Rc::new(RefCell::new(Vec::new())),
            max_depth,
        }
    }

    /// Pushes `rule`, or returns `None` when the stack is already
    /// `max_depth` deep.
    pub(crate) fn enter(&self, rule: Rule) -> Option<RuleGuard> {
        let mut rules = self.rules.borrow_mut();
        if rules.len() >= self.max_depth {
            return None;
        }
        rules.push(rule);
        Some(RuleGuard {
            rules: Rc::clone(&self.rules),
        })
    }

    /// The innermost active rule.
    pub(crate) fn current(&self) -> Rule {
        self.rules.borrow().last().copied().unwrap_or(Rule::Root)
    }

    #[cfg(test)]
    fn depth(&self) -> usize {
        self.rules.borrow().len()
    }
}

/// Pops its rule from the [`RuleStack`] when dropped.
#[derive(Debug)]
pub(crate) struct RuleGuard {
    rules: Rc<RefCell<Vec<Rule>>>,
}

impl Drop for RuleGuard {
    fn drop(&mut self) {
        self.rules.borrow_mut().pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_pops_on_drop() {
        let stack = RuleStack::new(8);
        assert_eq!(stack.current(), Rule::Root);
        {
            let _outer = stack.enter(Rule::SelectClause);
            let _inner = stack.enter(Rule::SelectElements);
            assert_eq!(stack.current(), Rule::SelectElements);
            assert_eq!(stack.depth(), 2);
        }
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_depth_limit() {
        let stack = RuleStack::new(2);
        let _a = stack.enter(Rule::Expression);
        let _b = stack.enter(Rule::Predicate);
        assert!(stack.enter(Rule::ExpressionAtom).is_none());
        assert_eq!(stack.current(), Rule::Predicate);
    }
}
