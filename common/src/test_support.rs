//! テスト用のファイルハンドルとプレビュー管理

use crate::error::Result;
use crate::image_ref::PreviewStore;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct TestFile(pub &'static str);

#[derive(Default)]
struct PreviewState {
    next_id: usize,
    active: HashSet<String>,
    released: Vec<String>,
}

/// 確保・解放を記録するプレビュー管理（クローン間で状態を共有）
#[derive(Clone, Default)]
pub struct CountingPreviews {
    state: Rc<RefCell<PreviewState>>,
}

impl CountingPreviews {
    pub fn active(&self) -> usize {
        self.state.borrow().active.len()
    }

    pub fn acquired(&self) -> usize {
        self.state.borrow().next_id
    }

    pub fn released_urls(&self) -> Vec<String> {
        self.state.borrow().released.clone()
    }
}

impl PreviewStore<TestFile> for CountingPreviews {
    fn acquire(&mut self, file: &TestFile) -> Result<String> {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let url = format!("blob:{}-{}", state.next_id, file.0);
        state.active.insert(url.clone());
        Ok(url)
    }

    fn release(&mut self, url: &str) {
        let mut state = self.state.borrow_mut();
        state.active.remove(url);
        state.released.push(url.to_string());
    }
}
