use super::super::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl Grid {
    /// Out-of-range reads as touched so nothing ever targets it
    #[inline]
    pub fn touched(&self, x: i32, y: i32) -> bool {
        match self.checked_index(x, y) {
            Some(idx) => self.touched[idx] != 0,
            None => true,
        }
    }

    /// Clear every touched flag. Called once at tick start, never mid-tick.
    #[inline]
    pub fn reset_moved(&mut self) {
        #[cfg(feature = "parallel")]
        {
            self.touched.par_iter_mut().for_each(|v| *v = 0);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.touched.fill(0);
        }
    }
}
