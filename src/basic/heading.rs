use std::ops::Neg;

use crate::basic::Point;
use Heading::*;

// defined in clockwise order starting at Up
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Heading {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl From<u8> for Heading {
    fn from(num: u8) -> Self {
        match num % 4 {
            0 => Up,
            1 => Right,
            2 => Down,
            _ => Left,
        }
    }
}

impl Neg for Heading {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from(self as u8 + 2)
    }
}

impl Heading {
    // clockwise order starting from Up
    #[cfg(test)]
    pub fn iter() -> impl Iterator<Item = Self> + Clone {
        [Up, Right, Down, Left].iter().copied()
    }

    pub fn is_reverse_of(self, other: Self) -> bool {
        self == -other
    }

    /// Turn towards `requested` unless that would be a 180° turn,
    /// returns whether the heading was applied
    pub fn turn(&mut self, requested: Self) -> bool {
        if requested.is_reverse_of(*self) {
            return false;
        }
        *self = requested;
        true
    }

    /// Velocity of something moving `speed` pixels per tick in this
    /// heading, screen coordinates grow downwards
    pub fn velocity(self, speed: f32) -> Point {
        match self {
            Up => Point { x: 0., y: -speed },
            Down => Point { x: 0., y: speed },
            Left => Point { x: -speed, y: 0. },
            Right => Point { x: speed, y: 0. },
        }
    }
}

#[test]
fn test_opposite() {
    for (heading, opposite) in [(Up, Down), (Down, Up), (Left, Right), (Right, Left)] {
        assert_eq!(-heading, opposite);
        assert_eq!(-(-heading), heading);
    }
}

#[test]
fn test_turn_rejects_only_reversal() {
    for current in Heading::iter() {
        for requested in Heading::iter() {
            let mut heading = current;
            let applied = heading.turn(requested);
            if requested == -current {
                assert!(!applied, "{:?} => {:?}", current, requested);
                assert_eq!(heading, current);
            } else {
                assert!(applied, "{:?} => {:?}", current, requested);
                assert_eq!(heading, requested);
            }
        }
    }
}

#[test]
fn test_iter_cycles_clockwise() {
    let turns: Vec<_> = Heading::iter().cycle().take(6).collect();
    assert_eq!(turns, [Up, Right, Down, Left, Up, Right]);
}

#[test]
fn test_velocity() {
    assert_eq!(Up.velocity(2.), Point { x: 0., y: -2. });
    assert_eq!(Down.velocity(2.), Point { x: 0., y: 2. });
    assert_eq!(Left.velocity(2.), Point { x: -2., y: 0. });
    assert_eq!(Right.velocity(2.), Point { x: 2., y: 0. });

    // exactly one axis is non-zero
    for heading in Heading::iter() {
        let Point { x, y } = heading.velocity(3.5);
        assert!((x == 0.) != (y == 0.));
        assert_eq!(x.abs() + y.abs(), 3.5);
    }
}
