/// Row-major pixel buffer.
#[derive(Clone, Debug)]
pub struct Film<T> {
    pub buffer: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Copy> Film<T> {
    pub fn new(width: usize, height: usize, fill_value: T) -> Film<T> {
        Film {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }

    pub fn at(&self, x: usize, y: usize) -> T {
        self.buffer[y * self.width + x]
    }

    pub fn write_at(&mut self, x: usize, y: usize, value: T) {
        self.buffer[y * self.width + x] = value;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        let mut film = Film::new(4, 3, 0u32);
        film.write_at(1, 2, 7);
        assert_eq!(film.buffer[2 * 4 + 1], 7);
        assert_eq!(film.at(1, 2), 7);
        assert_eq!(film.buffer.len(), 12);
    }
}
