use super::init;

#[test]
fn test_init() {
    init("info").expect("failed to init logger");
}

#[test]
fn test_init_twice() {
    init("info").expect("failed to init logger");
    init("debug").expect("second init should be a no-op");
}
