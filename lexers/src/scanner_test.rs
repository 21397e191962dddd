use crate::scanner::Scanner;

#[test]
fn extremes() {
    let mut s = Scanner::new("just a test buffer@".chars());
    assert_eq!(s.curr(), None);
    assert_eq!(s.next(), Some('j'));
    assert!(s.set_pos(-1));
    assert_eq!(s.curr(), None);
    while s.next() != Some('@') {}
    assert_eq!(s.curr(), Some('@'));
    let at = s.pos();
    assert!(s.set_pos(at - 2));
    assert_eq!(s.curr(), Some('e'));
    assert_eq!(s.next(), Some('r'));
    assert_eq!(s.next(), Some('@'));
    assert_eq!(s.next(), None);
    assert_eq!(s.next(), None);
    assert!(s.set_pos(at));
    assert_eq!(s.curr(), Some('@'));
}

#[test]
fn extract() {
    let mut s = Scanner::new("just a test buffer@".chars());
    for _ in 0..4 {
        assert!(s.next().is_some());
    }
    assert_eq!(s.extract_string(), "just");
    assert_eq!(s.peek(), Some(' '));
    assert_eq!(s.curr(), None);
    assert_eq!(s.next(), Some(' '));
    for _ in 0..6 {
        assert!(s.next().is_some());
    }
    assert_eq!(s.extract_string(), " a test");
    assert_eq!(s.next(), Some(' '));
}

#[test]
fn accept() {
    let mut s = Scanner::new("heey  you!".chars());
    assert!(!s.skip_ws());
    assert_eq!(s.accept_any(&['h', 'e']), Some('h'));
    assert_eq!(s.curr(), Some('h'));
    assert_eq!(s.accept(&'e'), Some('e'));
    assert_eq!(s.accept_any(&['h', 'y', 'e']), Some('e'));
    assert_eq!(s.accept(&'e'), None);
    assert_eq!(s.curr(), Some('e'));
    assert_eq!(s.accept_any(&['h', 'e', 'y']), Some('y'));
    assert!(s.skip_ws());
    assert!(!s.skip_ws());
    assert_eq!(s.curr(), Some(' '));
    assert_eq!(s.peek(), Some('y'));
    assert_eq!(s.next(), Some('y'));
}

#[test]
fn skips() {
    let mut s = Scanner::new("heey  you!".chars());
    assert!(s.skip_all(&['h', 'e', 'y']));
    assert!(!s.skip_all(&['h', 'e', 'y']));
    assert_eq!(s.curr(), Some('y'));
    assert!(s.until_any(&['!']));
    assert!(!s.until_any(&['!']));
    assert_eq!(s.accept(&'!'), Some('!'));
    assert_eq!(s.next(), None);
    assert_eq!(s.curr(), None);
}

#[test]
fn backtrack() {
    let mut s = Scanner::new(vec![1, 2, 3].into_iter());
    let start = s.pos();
    assert_eq!(s.next(), Some(1));
    assert_eq!(s.next(), Some(2));
    assert!(s.set_pos(start));
    assert_eq!(s.next(), Some(1));
    assert!(!s.set_pos(7));
    assert_eq!(s.view(), &[1]);
}
