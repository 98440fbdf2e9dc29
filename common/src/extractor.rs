//! 定義リスト（`<dl>`/`<dt>`/`<dd>`）マイクロフォーマットの抽出
//!
//! 投稿本文（cooked HTML）を開始タグ・終了タグ・テキストのイベント列として走査し、
//! 用語 → 値 のマップを組み立てる。
//!
//! ## 状態遷移
//! ```text
//! Outside --<dl>--> InList --<dt>--> InTerm --</dt>--> InList
//!                   InList --<dd>--> InValue --</dd>--> InList
//!                   (any)  --</dl>--> Outside
//! ```
//! ネストは扱わない。不正なマークアップでもエラーにせず、それまでに集めた値を返す。

use scraper::{ElementRef, Html, Node};
use std::collections::BTreeMap;

/// 用語（タイトルケース化済み）→ 値
pub type Definitions = BTreeMap<String, String>;

const LIST_TAG: &str = "dl";
const TERM_TAG: &str = "dt";
const VALUE_TAG: &str = "dd";
const LINE_BREAK_TAG: &str = "br";

/// 走査状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Outside,
    InList,
    InTerm,
    InValue,
}

/// マークアップのトークン
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupEvent<'a> {
    Start(&'a str),
    End(&'a str),
    Text(&'a str),
}

/// 定義リストの状態機械
#[derive(Debug, Default)]
pub struct DefinitionScanner {
    state: ScanState,
    pending_key: Option<String>,
    definitions: Definitions,
}

impl DefinitionScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// イベントを1つ処理する
    pub fn feed(&mut self, event: MarkupEvent<'_>) {
        match event {
            MarkupEvent::Start(tag) => self.start_tag(tag),
            MarkupEvent::End(tag) => self.end_tag(tag),
            MarkupEvent::Text(text) => self.text(text),
        }
    }

    /// 走査を終了して結果を返す
    pub fn finish(self) -> Definitions {
        self.definitions
    }

    fn start_tag(&mut self, tag: &str) {
        let tag = tag.trim();
        if tag.eq_ignore_ascii_case(LIST_TAG) {
            // 2つ目の<dl>は状態を再設定するだけ
            if self.state == ScanState::Outside {
                self.state = ScanState::InList;
            }
        } else if tag.eq_ignore_ascii_case(TERM_TAG) {
            if self.state != ScanState::Outside {
                self.state = ScanState::InTerm;
                self.pending_key = None;
            }
        } else if tag.eq_ignore_ascii_case(VALUE_TAG) {
            if self.state != ScanState::Outside {
                self.state = ScanState::InValue;
                if let Some(key) = &self.pending_key {
                    self.definitions.entry(key.clone()).or_default();
                }
            }
        } else if tag.eq_ignore_ascii_case(LINE_BREAK_TAG) && self.state == ScanState::InValue {
            self.append_value("\n");
        }
    }

    fn end_tag(&mut self, tag: &str) {
        let tag = tag.trim();
        if tag.eq_ignore_ascii_case(LIST_TAG) {
            self.state = ScanState::Outside;
            self.pending_key = None;
        } else if tag.eq_ignore_ascii_case(TERM_TAG) {
            if self.state == ScanState::InTerm {
                self.state = ScanState::InList;
            }
        } else if tag.eq_ignore_ascii_case(VALUE_TAG) && self.state == ScanState::InValue {
            self.state = ScanState::InList;
        }
    }

    fn text(&mut self, raw: &str) {
        let text = raw.trim();
        if text.is_empty() {
            return;
        }
        match self.state {
            ScanState::InTerm => self.pending_key = Some(normalize_key(text)),
            ScanState::InValue => self.append_value(text),
            ScanState::Outside | ScanState::InList => {}
        }
    }

    fn append_value(&mut self, text: &str) {
        if let Some(key) = &self.pending_key {
            self.definitions.entry(key.clone()).or_default().push_str(text);
        }
    }

    /// DOMを文書順にたどり、開始・テキスト・終了のイベントを流す
    ///
    /// 再帰せず、明示的なスタックで走査する。
    fn walk(&mut self, root: ElementRef<'_>) {
        let mut steps = Vec::new();
        push_children(&mut steps, root);

        while let Some(step) = steps.pop() {
            match step {
                WalkStep::Enter(element) => {
                    let name = element.value().name();
                    self.feed(MarkupEvent::Start(name));
                    steps.push(WalkStep::Leave(name));
                    push_children(&mut steps, element);
                }
                WalkStep::Text(text) => self.feed(MarkupEvent::Text(text)),
                WalkStep::Leave(name) => self.feed(MarkupEvent::End(name)),
            }
        }
    }
}

/// 走査待ちの要素
enum WalkStep<'a> {
    Enter(ElementRef<'a>),
    Text(&'a str),
    Leave(&'a str),
}

/// 子ノードを文書順に取り出せるよう逆順で積む
fn push_children<'a>(steps: &mut Vec<WalkStep<'a>>, element: ElementRef<'a>) {
    let children: Vec<_> = element.children().collect();
    for child in children.into_iter().rev() {
        match child.value() {
            Node::Text(text) => steps.push(WalkStep::Text(&**text)),
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    steps.push(WalkStep::Enter(child_element));
                }
            }
            _ => {}
        }
    }
}

/// 用語をタイトルケースにする（先頭のみ大文字、残りは小文字）
///
/// `"LATITUDE"` / `"latitude"` / `"Latitude"` はすべて `"Latitude"` になる。
pub fn normalize_key(term: &str) -> String {
    let mut chars = term.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// 投稿本文から定義リストを抽出する
///
/// 定義リストが無ければ空のマップを返す。
pub fn extract(markup: &str) -> Definitions {
    let fragment = Html::parse_fragment(markup);
    let mut scanner = DefinitionScanner::new();
    scanner.walk(fragment.root_element());
    scanner.finish()
}
