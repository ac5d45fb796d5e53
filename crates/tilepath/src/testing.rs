//! Closure-backed maps for unit tests.

use std::marker::PhantomData;

use tilepath_core::{Point, Range};

use crate::traits::TileMap;

pub(crate) struct FnMap<F, C> {
    width: i32,
    height: i32,
    accept: F,
    _conditions: PhantomData<fn(&C)>,
}

impl<F, C> TileMap for FnMap<F, C>
where
    F: Fn(Point, &C) -> bool,
{
    type Conditions = C;

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn accept_rect(&self, rect: Range, conditions: &C) -> bool {
        assert_eq!(rect.len(), 1, "finder asked about a multi-tile rect");
        assert!(
            Range::new(0, 0, self.width, self.height).contains(rect.min),
            "finder asked about {} outside the map",
            rect.min
        );
        (self.accept)(rect.min, conditions)
    }
}

pub(crate) fn with_conditions<C, F>(width: i32, height: i32, accept: F) -> FnMap<F, C>
where
    F: Fn(Point, &C) -> bool,
{
    FnMap {
        width,
        height,
        accept,
        _conditions: PhantomData,
    }
}

pub(crate) fn from_fn(
    width: i32,
    height: i32,
    accept: impl Fn(Point) -> bool,
) -> FnMap<impl Fn(Point, &()) -> bool, ()> {
    with_conditions(width, height, move |p, _: &()| accept(p))
}

pub(crate) fn open(width: i32, height: i32) -> FnMap<impl Fn(Point, &()) -> bool, ()> {
    from_fn(width, height, |_| true)
}
