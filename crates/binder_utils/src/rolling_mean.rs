use alloc::collections::VecDeque;
use core::num::NonZeroUsize;

/// Running mean over the last `size` samples.
///
/// Adding a sample beyond the window drops the oldest one. An empty window
/// has a mean of `0.0`.
///
/// # Examples
///
/// ```
/// use core::num::NonZeroUsize;
/// use binder_utils::RollingMean;
///
/// let mut mean = RollingMean::new(NonZeroUsize::new(2).unwrap());
/// mean.add(1.0);
/// mean.add(3.0);
/// assert_eq!(mean.mean(), 2.0);
///
/// mean.add(5.0);
/// assert_eq!(mean.mean(), 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct RollingMean {
    size: NonZeroUsize,
    values: VecDeque<f32>,
    mean: f32,
}

impl RollingMean {
    /// Creates an empty window holding at most `size` samples.
    pub fn new(size: NonZeroUsize) -> Self {
        Self {
            size,
            values: VecDeque::with_capacity(size.get() + 1),
            mean: 0.0,
        }
    }

    /// Creates a window of `size` samples, or `None` if `size` is zero.
    #[inline]
    pub fn try_new(size: usize) -> Option<Self> {
        NonZeroUsize::new(size).map(Self::new)
    }

    /// The current mean.
    #[inline]
    pub fn mean(&self) -> f32 {
        self.mean
    }

    #[inline]
    pub fn size(&self) -> NonZeroUsize {
        self.size
    }

    /// Number of samples currently in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Pushes a sample, evicting the oldest one when the window is full.
    pub fn add(&mut self, value: f32) {
        self.values.push_back(value);
        if self.values.len() > self.size.get() {
            self.values.pop_front();
        }
        self.recalculate();
    }

    /// Drops the oldest sample, if any.
    pub fn remove(&mut self) {
        if self.values.pop_front().is_some() {
            self.recalculate();
        }
    }

    /// Drops every sample and resets the mean to `0.0`.
    pub fn clear(&mut self) {
        self.values.clear();
        self.mean = 0.0;
    }

    fn recalculate(&mut self) {
        self.mean = if self.values.is_empty() {
            0.0
        } else {
            self.values.iter().sum::<f32>() / self.values.len() as f32
        };
    }
}

#[cfg(test)]
mod tests {
    use super::RollingMean;

    #[test]
    fn zero_size_is_rejected() {
        assert!(RollingMean::try_new(0).is_none());
        assert!(RollingMean::try_new(1).is_some());
    }

    #[test]
    fn window_evicts_oldest() {
        let mut mean = RollingMean::try_new(3).unwrap();
        for value in [3.0, 6.0, 9.0, 12.0] {
            mean.add(value);
        }

        assert_eq!(mean.len(), 3);
        assert_eq!(mean.mean(), 9.0);

        mean.remove();
        assert_eq!(mean.mean(), 10.5);
    }

    #[test]
    fn clear_resets_mean() {
        let mut mean = RollingMean::try_new(5).unwrap();
        for value in [3.0, 4.0, 8.0] {
            mean.add(value);
        }
        assert!(mean.mean() > 0.0);

        mean.clear();
        assert_eq!(mean.mean(), 0.0);
        assert!(mean.is_empty());

        mean.remove();
        assert_eq!(mean.mean(), 0.0);
    }

    #[test]
    fn removing_last_sample_zeroes_mean() {
        let mut mean = RollingMean::try_new(2).unwrap();
        mean.add(4.0);
        mean.remove();
        assert_eq!(mean.mean(), 0.0);
    }
}
