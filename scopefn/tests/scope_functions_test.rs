// Copyright 2026 scopefn Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![expect(missing_docs)]

use std::cell::Cell;

use scopefn::prelude::*;

fn greet(value: Option<&str>) -> Option<String> {
    value.then_let(|it| format!("{it} World!"))
}

#[test]
fn test_let() {
    let list = Vec::new().let_(|mut it| {
        it.push(1);
        it.push(2);
        it
    });
    assert_eq!(list, vec![1, 2]);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_also() {
    let list = Vec::new().also_mut(|it| {
        it.push(1);
        it.push(2);
    });
    assert_eq!(list, vec![1, 2]);
}

#[test]
fn test_run() {
    let mut list = vec![];
    let count = list.run(|this| {
        this.push(1);
        this.push(2);
        this.len()
    });
    assert_eq!(count, 2);
}

#[test]
fn test_apply() {
    let list = Vec::new().apply(|this| {
        this.push(1);
        this.push(2);
    });
    assert_eq!(list, vec![1, 2]);
}

#[test]
fn test_with() {
    let list = vec![1, 2];
    assert_eq!(with(&list, |this| this.len()), 2);
}

#[test]
fn test_conditional_present() {
    assert_eq!(greet(Some("Hello")), Some("Hello World!".to_string()));
}

#[test]
fn test_conditional_absent() {
    let called = Cell::new(false);
    let res = None::<&str>.then_let(|it| {
        called.set(true);
        format!("{it} World!")
    });
    assert_eq!(res, None);
    assert!(!called.get());
    assert_eq!(greet(None), None);
}

#[test]
fn test_idempotent() {
    let fresh = || vec![1, 2];

    assert_eq!(fresh().let_(|it| it.len()), fresh().let_(|it| it.len()));
    assert_eq!(fresh().run(|this| this.pop()), fresh().run(|this| this.pop()));
    assert_eq!(run(|| fresh().len()), run(|| fresh().len()));
    assert_eq!(with(fresh(), |this| this.len()), with(fresh(), |this| this.len()));
    assert_eq!(
        fresh().apply(|this| this.push(3)),
        fresh().apply(|this| this.push(3))
    );
    assert_eq!(
        fresh().also_mut(|it| it.push(3)),
        fresh().also_mut(|it| it.push(3))
    );
    assert_eq!(fresh().also(|it| assert_eq!(it.len(), 2)), fresh().also(|it| assert_eq!(it.len(), 2)));
    assert_eq!(fresh().let_ref(|it| it.iter().sum::<i32>()), fresh().let_ref(|it| it.iter().sum::<i32>()));
    assert_eq!(fresh().let_mut(|it| it.pop()), fresh().let_mut(|it| it.pop()));
}

fn is_send_sync_static<T: Send + Sync + 'static>() {}

#[test]
fn test_send_sync_static() {
    is_send_sync_static::<ScopeFunction>();
    is_send_sync_static::<Selection>();
    is_send_sync_static::<BindingMode>();
    is_send_sync_static::<ReturnMode>();
    is_send_sync_static::<CallStyle>();
    is_send_sync_static::<Either<usize, Vec<i32>>>();
    is_send_sync_static::<Error>();
}

#[test_log::test]
fn test_try_dispatch_propagates_block_error() {
    let err = ScopeFunction::Also
        .try_invoke(vec![1, 2], |it| {
            it.first()
                .copied()
                .filter(|v| *v > 1)
                .ok_or_else(|| anyhow::anyhow!("first element is too small"))
        })
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::External);
    assert_eq!(err.source().unwrap().to_string(), "first element is too small");

    let outcome = ScopeFunction::Apply
        .try_invoke(vec![1, 2], |this| {
            this.push(3);
            Ok::<_, anyhow::Error>(())
        })
        .unwrap();
    assert_eq!(outcome.right(), Some(vec![1, 2, 3]));
}

#[test_log::test]
fn test_dispatch_matches_methods() {
    let push_two = |list: &mut Vec<i32>| {
        list.push(1);
        list.push(2);
        list.len()
    };

    for name in ["let", "run", "with", "apply", "also"] {
        let f: ScopeFunction = name.parse().unwrap();
        let first = f.invoke(vec![], push_two).unwrap();
        let second = f.invoke(vec![], push_two).unwrap();
        assert_eq!(first, second);

        match f.returns() {
            ReturnMode::BlockResult => assert_eq!(first.left(), Some(2)),
            ReturnMode::Original => assert_eq!(first.right(), Some(vec![1, 2])),
        }
    }

    let f: ScopeFunction = "run (free)".parse().unwrap();
    assert_eq!(f.invoke_free(|| 2).unwrap(), 2);
    assert_eq!(f.invoke(vec![], push_two).unwrap_err().kind(), ErrorKind::Unbound);
}

#[test_log::test]
fn test_select_by_modes() {
    let f = ScopeFunction::select(Selection::new(
        BindingMode::Parameter,
        ReturnMode::Original,
        CallStyle::Method,
    ))
    .unwrap();
    assert_eq!(f, ScopeFunction::Also);

    let f = ScopeFunction::select(Selection::new(
        BindingMode::Receiver,
        ReturnMode::BlockResult,
        CallStyle::FreeWithArgument,
    ))
    .unwrap();
    assert_eq!(f, ScopeFunction::With);
}
