use crate::types::point::Point;
use num_traits::Float;
use std::ops::Sub;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect<T> {
    pub min: Point<T>,
    pub max: Point<T>,
}

/// Size of a drawing surface in device-independent units, anchored at the origin.
pub type Dimensions = Rect<f64>;

impl<T> Default for Rect<T>
where
    T: Default,
{
    fn default() -> Self {
        Rect {
            min: Point::<T>::default(),
            max: Point::<T>::default(),
        }
    }
}

impl<T> Rect<T>
where
    T: Copy + Sub<Output = T>,
{
    pub fn width(&self) -> T {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> T {
        self.max.y - self.min.y
    }
}

impl<T> Rect<T>
where
    T: Float,
{
    pub fn from_wh(width: T, height: T) -> Self {
        Rect {
            min: Point::new(T::zero(), T::zero()),
            max: Point::new(width, height),
        }
    }

    /// Square of side `2 * half` around `center`.
    pub fn centered_square(center: Point<T>, half: T) -> Self {
        let offset = Point::new(half, half);
        Rect {
            min: center - offset,
            max: center + offset,
        }
    }

    pub fn center(&self) -> Point<T> {
        let two = T::one() + T::one();
        Point::new(
            self.min.x + self.width() / two,
            self.min.y + self.height() / two,
        )
    }

    /// A rect with no drawable area: zero, negative or non-finite extent.
    pub fn is_empty(&self) -> bool {
        let (w, h) = (self.width(), self.height());
        !(w.is_finite() && h.is_finite() && w > T::zero() && h > T::zero())
    }
}
