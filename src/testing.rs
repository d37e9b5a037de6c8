//! In-Memory DOM
//!
//! A small document for unit tests: element tree with a selector matcher,
//! a virtual clock for timers, scripted confirm answers, and records of
//! everything the storefront asked the browser to do.

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

use crate::dom::{Dom, DomEvent, Listener, Widget};
use crate::error::{Result, StorefrontError};
use crate::timers::{TimerDriver, TimerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

const BODY: NodeId = NodeId(0);

#[derive(Default)]
struct NodeData {
    tag: String,
    attrs: BTreeMap<String, String>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    inner_html: String,
    text: String,
    value: String,
    disabled: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    listeners: Vec<(String, Listener)>,
}

struct PendingTimer {
    id: TimerId,
    due: u64,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct State {
    nodes: Vec<NodeData>,
    window_listeners: Vec<(String, Listener)>,
    scroll_y: f64,
    confirm_answers: VecDeque<bool>,
    confirm_messages: Vec<String>,
    submitted: Vec<NodeId>,
    scrolled_into_view: Vec<NodeId>,
    scrolled_to_top: usize,
    widgets: Vec<(NodeId, Widget)>,
    closed_alerts: Vec<NodeId>,
    bootstrap_missing: bool,
    observers_missing: bool,
    visibility_watchers: Vec<(NodeId, Box<dyn FnOnce()>)>,
    change_watchers: Vec<(NodeId, Rc<dyn Fn()>)>,
    now: u64,
    next_timer: u64,
    timers: Vec<PendingTimer>,
}

pub struct FakeDom {
    state: RefCell<State>,
}

impl Default for FakeDom {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeDom {
    pub fn new() -> Self {
        let mut state = State::default();
        state.nodes.push(NodeData {
            tag: "body".to_string(),
            ..Default::default()
        });
        Self {
            state: RefCell::new(state),
        }
    }

    // ========================
    // Building
    // ========================

    pub fn body(&self) -> NodeId {
        BODY
    }

    /// Append a new element to `body`
    pub fn add(&self, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        self.append(BODY, tag, attrs)
    }

    pub fn append(&self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let id = self.new_node(tag);
        {
            let mut state = self.state.borrow_mut();
            for (name, value) in attrs {
                write_attribute(&mut state.nodes[id.0], name, value);
            }
            state.nodes[id.0].parent = Some(parent);
            state.nodes[parent.0].children.push(id);
        }
        id
    }

    pub fn set_text(&self, node: NodeId, text: &str) {
        self.set_text_content(&node, text);
    }

    pub fn type_value(&self, node: NodeId, value: &str) {
        self.state.borrow_mut().nodes[node.0].value = value.to_string();
    }

    pub fn without_bootstrap(&self) {
        self.state.borrow_mut().bootstrap_missing = true;
    }

    /// Make `observe_visible` fail, as in browsers without
    /// IntersectionObserver
    pub fn without_intersection_observer(&self) {
        self.state.borrow_mut().observers_missing = true;
    }

    pub fn answer_confirm(&self, answer: bool) {
        self.state.borrow_mut().confirm_answers.push_back(answer);
    }

    pub fn set_scroll(&self, y: f64) {
        self.state.borrow_mut().scroll_y = y;
    }

    // ========================
    // Driving
    // ========================

    /// Dispatch `kind` to the node's listeners
    pub fn fire(&self, node: NodeId, kind: &str) -> DomEvent {
        let listeners: Vec<Listener> = self.state.borrow().nodes[node.0]
            .listeners
            .iter()
            .filter(|(event, _)| event == kind)
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        let event = DomEvent::new(kind);
        for listener in listeners {
            listener(&event);
        }
        event
    }

    pub fn fire_window(&self, kind: &str) -> DomEvent {
        self.dispatch_window(DomEvent::new(kind))
    }

    /// `pagehide`/`pageshow` with the back/forward cache flag
    pub fn fire_page_transition(&self, kind: &str, persisted: bool) -> DomEvent {
        self.dispatch_window(DomEvent::page_transition(kind, persisted))
    }

    fn dispatch_window(&self, event: DomEvent) -> DomEvent {
        let kind = event.kind().to_string();
        let listeners: Vec<Listener> = self
            .state
            .borrow()
            .window_listeners
            .iter()
            .filter(|(name, _)| *name == kind)
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&event);
        }
        event
    }

    /// Scroll `node` into the viewport, firing its visibility watchers once
    pub fn reveal(&self, node: NodeId) {
        let watchers: Vec<Box<dyn FnOnce()>> = {
            let mut state = self.state.borrow_mut();
            let (hit, keep) = std::mem::take(&mut state.visibility_watchers)
                .into_iter()
                .partition(|(watched, _)| *watched == node);
            state.visibility_watchers = keep;
            hit.into_iter().map(|(_, f)| f).collect()
        };
        for watcher in watchers {
            watcher();
        }
    }

    /// Move the virtual clock forward, firing due timers in order
    pub fn advance(&self, ms: u64) {
        let target = self.state.borrow().now + ms;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let due = state
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.id))
                    .map(|(i, _)| i);
                due.map(|i| {
                    let timer = state.timers.remove(i);
                    state.now = timer.due;
                    timer.callback
                })
            };
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
    }

    // ========================
    // Inspecting
    // ========================

    pub fn now(&self) -> u64 {
        self.state.borrow().now
    }

    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.state.borrow().nodes[node.0].classes.clone()
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.state.borrow().nodes[node.0].styles.get(property).cloned()
    }

    pub fn is_disabled(&self, node: NodeId) -> bool {
        self.state.borrow().nodes[node.0].disabled
    }

    pub fn is_attached(&self, node: NodeId) -> bool {
        let state = self.state.borrow();
        let mut current = node;
        loop {
            if current == BODY {
                return true;
            }
            match state.nodes[current.0].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.state.borrow().nodes[node.0].children.clone()
    }

    pub fn submitted_forms(&self) -> Vec<NodeId> {
        self.state.borrow().submitted.clone()
    }

    /// `(name, value)` of the inputs inside a form
    pub fn form_fields(&self, form: NodeId) -> Vec<(String, String)> {
        let state = self.state.borrow();
        state.nodes[form.0]
            .children
            .iter()
            .map(|child| &state.nodes[child.0])
            .filter(|node| node.tag == "input")
            .map(|node| {
                (
                    node.attrs.get("name").cloned().unwrap_or_default(),
                    node.value.clone(),
                )
            })
            .collect()
    }

    pub fn confirm_messages(&self) -> Vec<String> {
        self.state.borrow().confirm_messages.clone()
    }

    pub fn scrolled_into_view(&self) -> Vec<NodeId> {
        self.state.borrow().scrolled_into_view.clone()
    }

    pub fn scroll_to_top_count(&self) -> usize {
        self.state.borrow().scrolled_to_top
    }

    pub fn widgets(&self) -> Vec<(NodeId, Widget)> {
        self.state.borrow().widgets.clone()
    }

    pub fn closed_alerts(&self) -> Vec<NodeId> {
        self.state.borrow().closed_alerts.clone()
    }

    pub fn watched_for_visibility(&self) -> usize {
        self.state.borrow().visibility_watchers.len()
    }

    // ========================
    // Internals
    // ========================

    fn new_node(&self, tag: &str) -> NodeId {
        let mut state = self.state.borrow_mut();
        state.nodes.push(NodeData {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        });
        NodeId(state.nodes.len() - 1)
    }

    fn detach(state: &mut State, node: NodeId) {
        if let Some(parent) = state.nodes[node.0].parent.take() {
            state.nodes[parent.0].children.retain(|c| *c != node);
        }
    }

    /// Change watchers on `node` or any of its ancestors
    fn change_watchers_for(&self, node: NodeId) -> Vec<Rc<dyn Fn()>> {
        let state = self.state.borrow();
        let mut chain = vec![node];
        let mut current = node;
        while let Some(parent) = state.nodes[current.0].parent {
            chain.push(parent);
            current = parent;
        }
        state
            .change_watchers
            .iter()
            .filter(|(watched, _)| chain.contains(watched))
            .map(|(_, f)| Rc::clone(f))
            .collect()
    }

    fn notify_changed(&self, node: NodeId) {
        for watcher in self.change_watchers_for(node) {
            watcher();
        }
    }

    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let state = self.state.borrow();
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = state.nodes[root.0].children.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(state.nodes[node.0].children.iter().rev().copied());
        }
        out
    }

    fn select(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        let Some(list) = selector::parse(selector) else {
            return Vec::new();
        };
        let candidates = self.descendants(root);
        let state = self.state.borrow();
        candidates
            .into_iter()
            .filter(|node| list.iter().any(|complex| matches_complex(&state, *node, complex)))
            .collect()
    }
}

fn write_attribute(node: &mut NodeData, name: &str, value: &str) {
    match name {
        "class" => node.classes = value.split_whitespace().map(str::to_string).collect(),
        "value" => {
            node.value = value.to_string();
            node.attrs.insert(name.to_string(), value.to_string());
        }
        "style" => node.styles = parse_style(value),
        _ => {
            node.attrs.insert(name.to_string(), value.to_string());
        }
    }
}

fn read_attribute(node: &NodeData, name: &str) -> Option<String> {
    match name {
        "class" if !node.classes.is_empty() => Some(node.classes.join(" ")),
        "class" => None,
        _ => node.attrs.get(name).cloned(),
    }
}

fn parse_style(css: &str) -> BTreeMap<String, String> {
    css.split(';')
        .filter_map(|decl| decl.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .filter(|(k, _)| !k.is_empty())
        .collect()
}

fn strip_tags(html: &str) -> String {
    let mut out = String::new();
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

fn matches_complex(state: &State, node: NodeId, parts: &[selector::Compound]) -> bool {
    let Some((last, rest)) = parts.split_last() else {
        return false;
    };
    if !matches_compound(&state.nodes[node.0], last) {
        return false;
    }
    if rest.is_empty() {
        return true;
    }
    let mut ancestor = state.nodes[node.0].parent;
    while let Some(candidate) = ancestor {
        if matches_complex(state, candidate, rest) {
            return true;
        }
        ancestor = state.nodes[candidate.0].parent;
    }
    false
}

fn matches_compound(node: &NodeData, compound: &selector::Compound) -> bool {
    use selector::AttrOp;

    if compound.tag.as_ref().is_some_and(|tag| *tag != node.tag) {
        return false;
    }
    if compound.id.as_ref().is_some_and(|id| node.attrs.get("id") != Some(id)) {
        return false;
    }
    if !compound.classes.iter().all(|c| node.classes.contains(c)) {
        return false;
    }
    compound.attrs.iter().all(|test| {
        let Some(actual) = read_attribute(node, &test.name) else {
            return false;
        };
        match test.op {
            AttrOp::Exists => true,
            AttrOp::Equals => actual == test.value,
            AttrOp::Prefix => !test.value.is_empty() && actual.starts_with(&test.value),
            AttrOp::Suffix => !test.value.is_empty() && actual.ends_with(&test.value),
            AttrOp::Contains => !test.value.is_empty() && actual.contains(&test.value),
        }
    })
}

impl Dom for FakeDom {
    type Node = NodeId;

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.select(BODY, selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.select(BODY, selector)
    }

    fn query_in(&self, scope: &NodeId, selector: &str) -> Option<NodeId> {
        self.select(*scope, selector).into_iter().next()
    }

    fn create_element(&self, tag: &str) -> Result<NodeId> {
        Ok(self.new_node(tag))
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> Result<()> {
        {
            let mut state = self.state.borrow_mut();
            Self::detach(&mut state, *child);
            state.nodes[child.0].parent = Some(*parent);
            state.nodes[parent.0].children.push(*child);
        }
        self.notify_changed(*parent);
        Ok(())
    }

    fn append_to_body(&self, node: &NodeId) -> Result<()> {
        self.append_child(&BODY, node)
    }

    fn remove(&self, node: &NodeId) {
        let parent = self.state.borrow().nodes[node.0].parent;
        Self::detach(&mut self.state.borrow_mut(), *node);
        if let Some(parent) = parent {
            self.notify_changed(parent);
        }
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        read_attribute(&self.state.borrow().nodes[node.0], name)
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) -> Result<()> {
        write_attribute(&mut self.state.borrow_mut().nodes[node.0], name, value);
        Ok(())
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.state.borrow().nodes[node.0].classes.iter().any(|c| c == class)
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        let mut state = self.state.borrow_mut();
        let classes = &mut state.nodes[node.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        self.state.borrow_mut().nodes[node.0].classes.retain(|c| c != class);
    }

    fn toggle_class(&self, node: &NodeId, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }

    fn set_class_name(&self, node: &NodeId, class_name: &str) {
        write_attribute(&mut self.state.borrow_mut().nodes[node.0], "class", class_name);
    }

    fn inner_html(&self, node: &NodeId) -> String {
        self.state.borrow().nodes[node.0].inner_html.clone()
    }

    fn set_inner_html(&self, node: &NodeId, html: &str) {
        {
            let mut state = self.state.borrow_mut();
            let data = &mut state.nodes[node.0];
            data.inner_html = html.to_string();
            data.text = strip_tags(html);
        }
        self.notify_changed(*node);
    }

    fn text_content(&self, node: &NodeId) -> String {
        self.state.borrow().nodes[node.0].text.clone()
    }

    fn set_text_content(&self, node: &NodeId, text: &str) {
        {
            let mut state = self.state.borrow_mut();
            let data = &mut state.nodes[node.0];
            data.text = text.to_string();
            data.inner_html = text.to_string();
        }
        self.notify_changed(*node);
    }

    fn value(&self, node: &NodeId) -> String {
        self.state.borrow().nodes[node.0].value.clone()
    }

    fn set_value(&self, node: &NodeId, value: &str) {
        self.state.borrow_mut().nodes[node.0].value = value.to_string();
    }

    fn set_disabled(&self, node: &NodeId, disabled: bool) {
        self.state.borrow_mut().nodes[node.0].disabled = disabled;
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        self.state.borrow_mut().nodes[node.0]
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn set_style_text(&self, node: &NodeId, css: &str) {
        self.state.borrow_mut().nodes[node.0].styles = parse_style(css);
    }

    fn listen(&self, node: &NodeId, event: &str, listener: Listener) {
        self.state.borrow_mut().nodes[node.0]
            .listeners
            .push((event.to_string(), listener));
    }

    fn listen_window(&self, event: &str, listener: Listener) {
        self.state
            .borrow_mut()
            .window_listeners
            .push((event.to_string(), listener));
    }

    fn observe_visible(&self, node: &NodeId, on_visible: Box<dyn FnOnce()>) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.observers_missing {
            return Err(StorefrontError::Js("IntersectionObserver is not defined".to_string()));
        }
        state.visibility_watchers.push((*node, on_visible));
        Ok(())
    }

    fn observe_changes(&self, node: &NodeId, on_change: Rc<dyn Fn()>) -> Result<()> {
        self.state.borrow_mut().change_watchers.push((*node, on_change));
        Ok(())
    }

    fn scroll_into_view(&self, node: &NodeId) {
        self.state.borrow_mut().scrolled_into_view.push(*node);
    }

    fn scroll_to_top(&self) {
        let mut state = self.state.borrow_mut();
        state.scrolled_to_top += 1;
        state.scroll_y = 0.0;
    }

    fn scroll_offset(&self) -> f64 {
        self.state.borrow().scroll_y
    }

    /// Unscripted prompts are declined
    fn confirm(&self, message: &str) -> bool {
        let mut state = self.state.borrow_mut();
        state.confirm_messages.push(message.to_string());
        state.confirm_answers.pop_front().unwrap_or(false)
    }

    fn submit(&self, form: &NodeId) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.nodes[form.0].tag != "form" {
            return Err(StorefrontError::Js("not a form".to_string()));
        }
        state.submitted.push(*form);
        Ok(())
    }

    fn init_widget(&self, node: &NodeId, widget: Widget) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.bootstrap_missing {
            return Err(StorefrontError::Js("bootstrap is not loaded".to_string()));
        }
        state.widgets.push((*node, widget));
        Ok(())
    }

    fn close_alert(&self, node: &NodeId) -> Result<()> {
        {
            let mut state = self.state.borrow_mut();
            if state.bootstrap_missing {
                return Err(StorefrontError::Js("bootstrap is not loaded".to_string()));
            }
            state.closed_alerts.push(*node);
        }
        self.remove(node);
        Ok(())
    }
}

impl TimerDriver for FakeDom {
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerId {
        let mut state = self.state.borrow_mut();
        let id = TimerId::new(state.next_timer);
        state.next_timer += 1;
        let due = state.now + u64::from(delay_ms);
        state.timers.push(PendingTimer { id, due, callback });
        id
    }

    fn clear_timeout(&self, id: TimerId) {
        self.state.borrow_mut().timers.retain(|t| t.id != id);
    }
}

/// The CSS selector subset the storefront uses: type, `#id`, `.class`,
/// `[attr]`, `[attr="v"]`, `[attr^="v"]`, `[attr$="v"]`, `[attr*="v"]`,
/// descendant combinators and comma lists.
mod selector {
    #[derive(Debug, Default)]
    pub struct Compound {
        pub tag: Option<String>,
        pub id: Option<String>,
        pub classes: Vec<String>,
        pub attrs: Vec<AttrTest>,
    }

    #[derive(Debug)]
    pub struct AttrTest {
        pub name: String,
        pub op: AttrOp,
        pub value: String,
    }

    #[derive(Debug, Clone, Copy)]
    pub enum AttrOp {
        Exists,
        Equals,
        Prefix,
        Suffix,
        Contains,
    }

    /// `None` for anything outside the subset, like the browser's
    /// `SyntaxError`
    pub fn parse(selector: &str) -> Option<Vec<Vec<Compound>>> {
        let mut parser = Parser {
            chars: selector.chars().collect(),
            pos: 0,
        };
        let mut list = Vec::new();
        loop {
            let complex = parser.complex()?;
            list.push(complex);
            match parser.peek() {
                Some(',') => parser.pos += 1,
                None => return Some(list),
                Some(_) => return None,
            }
        }
    }

    struct Parser {
        chars: Vec<char>,
        pos: usize,
    }

    impl Parser {
        fn peek(&self) -> Option<char> {
            self.chars.get(self.pos).copied()
        }

        fn skip_ws(&mut self) {
            while self.peek().is_some_and(char::is_whitespace) {
                self.pos += 1;
            }
        }

        fn ident(&mut self) -> String {
            let start = self.pos;
            while self
                .peek()
                .is_some_and(|c| c.is_alphanumeric() || c == '-' || c == '_')
            {
                self.pos += 1;
            }
            self.chars[start..self.pos].iter().collect()
        }

        fn complex(&mut self) -> Option<Vec<Compound>> {
            let mut parts = Vec::new();
            self.skip_ws();
            loop {
                parts.push(self.compound()?);
                self.skip_ws();
                match self.peek() {
                    None | Some(',') => return Some(parts),
                    Some(_) => {}
                }
            }
        }

        fn compound(&mut self) -> Option<Compound> {
            let start = self.pos;
            let mut compound = Compound::default();

            if self.peek() == Some('*') {
                self.pos += 1;
            } else {
                let tag = self.ident();
                if !tag.is_empty() {
                    compound.tag = Some(tag.to_ascii_lowercase());
                }
            }

            loop {
                match self.peek() {
                    Some('.') => {
                        self.pos += 1;
                        let class = self.ident();
                        if class.is_empty() {
                            return None;
                        }
                        compound.classes.push(class);
                    }
                    Some('#') => {
                        self.pos += 1;
                        let id = self.ident();
                        if id.is_empty() {
                            return None;
                        }
                        compound.id = Some(id);
                    }
                    Some('[') => {
                        self.pos += 1;
                        compound.attrs.push(self.attr()?);
                    }
                    _ => break,
                }
            }

            if self.pos == start {
                None
            } else {
                Some(compound)
            }
        }

        fn attr(&mut self) -> Option<AttrTest> {
            self.skip_ws();
            let name = self.ident();
            if name.is_empty() {
                return None;
            }
            self.skip_ws();

            let op = match self.peek()? {
                ']' => {
                    self.pos += 1;
                    return Some(AttrTest {
                        name,
                        op: AttrOp::Exists,
                        value: String::new(),
                    });
                }
                '=' => AttrOp::Equals,
                '^' => AttrOp::Prefix,
                '$' => AttrOp::Suffix,
                '*' => AttrOp::Contains,
                _ => return None,
            };
            self.pos += if matches!(op, AttrOp::Equals) { 1 } else { 2 };
            if !matches!(op, AttrOp::Equals) && self.chars.get(self.pos - 1) != Some(&'=') {
                return None;
            }

            self.skip_ws();
            let value = match self.peek()? {
                quote @ ('"' | '\'') => {
                    self.pos += 1;
                    let start = self.pos;
                    while self.peek()? != quote {
                        self.pos += 1;
                    }
                    let value: String = self.chars[start..self.pos].iter().collect();
                    self.pos += 1;
                    value
                }
                _ => self.ident(),
            };
            self.skip_ws();
            if self.peek()? != ']' {
                return None;
            }
            self.pos += 1;
            Some(AttrTest { name, op, value })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectors() {
        let dom = FakeDom::new();
        let form = dom.add("form", &[("action", "/cart/add"), ("method", "post")]);
        let button = dom.append(form, "button", &[("class", "btn btn-primary"), ("type", "submit")]);
        let link = dom.add("a", &[("href", "#reviews")]);
        let reviews = dom.add("section", &[("id", "reviews")]);

        assert_eq!(dom.query(r#"form[action*="/cart/add"] button"#), Some(button));
        assert_eq!(dom.query_in(&form, r#"button[type="submit"]"#), Some(button));
        assert_eq!(dom.query(r##"a[href^="#"]"##), Some(link));
        assert_eq!(dom.query("#reviews"), Some(reviews));
        assert_eq!(dom.query(".btn.btn-primary"), Some(button));
        assert_eq!(dom.query_all("form, section").len(), 2);
        assert_eq!(dom.query(r#"form[action="/products"]"#), None);
    }

    #[test]
    fn test_invalid_selector_matches_nothing() {
        let dom = FakeDom::new();
        dom.add("a", &[("href", "#")]);
        assert_eq!(dom.query("#"), None);
        assert!(dom.query_all("[unterminated").is_empty());
    }

    #[test]
    fn test_clock_orders_timers() {
        let dom = FakeDom::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (delay, tag) in [(30, "c"), (10, "a"), (20, "b")] {
            let log = Rc::clone(&log);
            dom.set_timeout(delay, Box::new(move || log.borrow_mut().push(tag)));
        }
        dom.advance(25);
        assert_eq!(*log.borrow(), vec!["a", "b"]);
        assert_eq!(dom.now(), 25);
        dom.advance(5);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }
}
