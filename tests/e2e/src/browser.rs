use anyhow::{anyhow, Result};
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .map_err(|e| anyhow!("failed to build launch options: {e}"))?;

        let browser = ChromeBrowser::new(options)?;

        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    pub fn find_element(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let text = element.get_inner_text()?;
        Ok(text)
    }

    pub fn type_text(&self, selector: &str, text: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        element.type_into(text)?;
        Ok(())
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        Ok(())
    }

    pub fn url(&self) -> Result<String> {
        Ok(self.tab.get_url())
    }

    /// Evaluate a JS expression and return its value as a string.
    pub fn eval_string(&self, expression: &str) -> Result<String> {
        let result = self.tab.evaluate(expression, false)?;
        match result.value {
            Some(serde_json::Value::String(s)) => Ok(s),
            Some(other) => Ok(other.to_string()),
            None => Err(anyhow!("expression returned no value: {expression}")),
        }
    }

    pub fn cookie(&self, name: &str) -> Result<Option<String>> {
        Ok(self
            .tab
            .get_cookies()?
            .into_iter()
            .find(|c| c.name == name)
            .map(|c| c.value))
    }

    /// Poll until the element's text contains `needle` (hydration and
    /// re-renders are asynchronous).
    pub fn wait_for_text(&self, selector: &str, needle: &str, timeout: Duration) -> Result<String> {
        let deadline = Instant::now() + timeout;
        loop {
            let text = self.find_element(selector)?;
            if text.contains(needle) {
                return Ok(text);
            }
            if Instant::now() >= deadline {
                anyhow::bail!("'{selector}' never contained '{needle}', last text: {text}");
            }
            std::thread::sleep(Duration::from_millis(100));
        }
    }
}
