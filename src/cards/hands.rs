use super::hand::Hand;

/// HandIterator yields every k-card Hand that avoids a blocked set of cards.
///
/// The open (unblocked) cards are numbered 0..n from the lowest bit up, and a
/// compact k-bit cursor over those n positions advances to the next pattern
/// with the same popcount (Gosper's hack). Each pattern is then scattered
/// back onto the open card bits, so iteration costs C(n, k) steps no matter
/// how sparse the open cards are. Nothing is allocated and iteration order is
/// lexicographic in the bit layout of [`Hand`].
///
/// - k = 0 yields exactly one empty Hand.
/// - Blocking the complement of a Hand enumerates subsets of that Hand.
pub struct HandIterator {
    next: u64,
    open: u64,
    n: usize,
    done: bool,
}

impl HandIterator {
    /// number of Hands this iterator yields from a fresh start
    pub fn combinations(&self) -> usize {
        let k = self.next.count_ones() as usize;
        match self.done || k > self.n {
            true => 0,
            false => (0..k).fold(1, |x, i| x * (self.n - i) / (i + 1)),
        }
    }

    fn exhausted(&self) -> bool {
        self.done || self.next >> self.n != 0
    }

    fn permute(&self) -> u64 {
        let  x = /* 000_100                       */ self.next;
        let  a = /* 000_111 <- 000_100 || 000_110 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a + 1;
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d - 1;
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_000 <-                    */ e >> f;
        let  h = /* 001_000 <- 001_000 || 000_000 */ b | g;
        h
    }

    /// scatter the compact cursor onto the open card bits
    fn deposit(&self) -> Hand {
        let mut bits = self.next;
        let mut open = self.open;
        let mut hand = 0u64;
        while bits != 0 {
            let low = open & open.wrapping_neg();
            if bits & 1 == 1 {
                hand |= low;
            }
            bits >>= 1;
            open ^= low;
        }
        Hand::from(hand)
    }

    fn advance(&mut self) {
        match self.next {
            0 => self.done = true,
            _ => self.next = self.permute(),
        }
    }
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let hand = self.deposit();
            self.advance();
            Some(hand)
        }
    }
}

/// size and mask are immutable and must be decided at construction
impl From<(usize, Hand)> for HandIterator {
    fn from((k, mask): (usize, Hand)) -> Self {
        let open = !u64::from(mask) & Hand::mask();
        let n = open.count_ones() as usize;
        Self {
            next: if k > n { 0 } else { (1u64 << k) - 1 },
            open,
            n,
            done: k > n,
        }
    }
}
