use wa_decode::binary::reader::read_string;
use wa_decode::{Cursor, DecodeError, ErrorKind, ResultChain, ResultExt};

// Golden: nest("inner") -> "outer" exposes both messages, parent untouched.
#[test]
fn golden_nest_inner_outer() {
    let inner = ResultChain::err("inner");
    let outer = ResultChain::nest(&inner, "outer");
    assert_eq!(outer.message(), Some("outer"));
    assert_eq!(outer.cause().and_then(ResultChain::message), Some("inner"));
    assert!(inner.is_err());
    assert_eq!(inner.message(), Some("inner"));
    assert_eq!(inner.cause(), None);
}

// Golden: each nest adds exactly one node.
#[test]
fn golden_depth_grows_by_one() {
    let mut c = ResultChain::err("base");
    for expected in 2..=20 {
        c = ResultChain::nest(&c, format!("layer {expected}"));
        assert_eq!(c.depth(), expected);
    }
    assert_eq!(c.root_cause(), &ResultChain::err("base"));
}

// Golden: a short string payload reported through context layers.
#[test]
fn golden_truncated_string_through_context() {
    let data = [0x0A, b'x', b'y'];
    let mut c = Cursor::new(&data);
    let err = read_string(&mut c)
        .context("export name")
        .context("export 0")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Nested);
    assert_eq!(err.depth(), 3);
    assert!(matches!(
        err.root(),
        DecodeError::Truncated { offset: 1, needed: 10, available: 2 }
    ));

    let chain = ResultChain::from(err);
    assert_eq!(chain.depth(), 3);
    let msgs: Vec<_> = chain.iter().filter_map(ResultChain::message).collect();
    assert_eq!(msgs[..2], ["export 0", "export name"]);
    assert!(msgs[2].starts_with("unexpected end of input at offset 1"));
    assert!(chain.to_string().starts_with("export 0: export name: unexpected end"));
}
