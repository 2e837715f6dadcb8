use readygo::config::ProjectConfig;
use readygo::error::Result;
use readygo::prompt::{prompt_for_config, Prompter};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Prompter that replays canned answers and records the questions asked.
struct ScriptedPrompter {
    texts: RefCell<VecDeque<&'static str>>,
    confirms: RefCell<VecDeque<bool>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    fn new(texts: &[&'static str], confirms: &[bool]) -> Self {
        Self {
            texts: RefCell::new(texts.iter().copied().collect()),
            confirms: RefCell::new(confirms.iter().copied().collect()),
            asked: RefCell::new(Vec::new()),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&self, prompt: &str, default: &str) -> Result<String> {
        self.asked.borrow_mut().push(format!("{prompt} [{default}]"));
        Ok(self.texts.borrow_mut().pop_front().unwrap_or_default().to_string())
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        self.asked.borrow_mut().push(format!("{prompt} [{default}]"));
        Ok(self.confirms.borrow_mut().pop_front().unwrap_or(default))
    }
}

#[test]
fn test_prompt_for_config() {
    let mut config = ProjectConfig::new("shop");
    let prompter = ScriptedPrompter::new(
        &["gitlab.com/acme/shop", "", "Acme", "product"],
        &[false, true, true],
    );

    let overrides = prompt_for_config(&prompter, &config).unwrap();
    config.apply(overrides);
    config.process();

    assert_eq!(config.module_name, "gitlab.com/acme/shop");
    assert_eq!(config.description, "A shop service");
    assert_eq!(config.author, "Acme");
    assert_eq!(config.sample_api_name, "Product");
    assert!(!config.with_redis);
    assert!(config.with_kafka);
    assert!(config.skip_git);

    let asked = prompter.asked.borrow();
    assert_eq!(asked[0], "Module name [github.com/username/shop]");
    assert_eq!(asked.len(), 7);
}
