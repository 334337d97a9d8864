//! Frame builders shared by the integration tests

#![allow(dead_code)]

pub fn place_frame(width: u32, height: u32, pixels: &[u32]) -> Vec<u8> {
    let mut buf = header(width, height);
    for p in pixels {
        buf.extend_from_slice(&p.to_le_bytes());
    }
    buf
}

pub fn tttoe_frame(
    width: u32,
    height: u32,
    cells: &[u8],
    lines: &[(u8, u8, i8, i8)],
    my_turn: u8,
) -> Vec<u8> {
    let mut buf = header(width, height);
    buf.extend_from_slice(cells);
    buf.extend_from_slice(&(lines.len() as u32).to_le_bytes());
    for &(x, y, dx, dy) in lines {
        buf.push(x);
        buf.push(y);
        buf.push(dx as u8);
        buf.push(dy as u8);
    }
    buf.push(my_turn);
    buf
}

/// Falling-block frame description
#[derive(Debug, Clone)]
pub struct TetroFrame {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<u32>,
    pub meter: f64,
    pub max: f64,
    pub penalty_lines: Vec<f64>,
    pub origin: (i32, i32),
    pub size: u32,
    pub color: u32,
    pub blocks: Vec<(u8, u8)>,
}

impl TetroFrame {
    /// Empty board with a horizontal four-block bar at the top-left
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![0; (width * height) as usize],
            meter: 0.0,
            max: 20.0,
            penalty_lines: Vec::new(),
            origin: (0, 0),
            size: 4,
            color: 0x508cd7,
            blocks: vec![(0, 0), (1, 0), (2, 0), (3, 0)],
        }
    }

    pub fn square(mut self, x: i32) -> Self {
        self.origin = (x, 0);
        self.size = 2;
        self.color = 0xe6c86e;
        self.blocks = vec![(0, 0), (1, 0), (0, 1), (1, 1)];
        self
    }

    pub fn fill(mut self, x: u32, y: u32, value: u32) -> Self {
        let idx = (y * self.width + x) as usize;
        self.cells[idx] = value;
        self
    }

    pub fn zone(mut self, meter: f64, max: f64) -> Self {
        self.meter = meter;
        self.max = max;
        self
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buf = header(self.width, self.height);
        for c in &self.cells {
            buf.extend_from_slice(&c.to_le_bytes());
        }
        buf.extend_from_slice(&self.meter.to_le_bytes());
        buf.extend_from_slice(&self.max.to_le_bytes());
        buf.extend_from_slice(&(self.penalty_lines.len() as u32).to_le_bytes());
        for l in &self.penalty_lines {
            buf.extend_from_slice(&l.to_le_bytes());
        }
        buf.extend_from_slice(&self.origin.0.to_le_bytes());
        buf.extend_from_slice(&self.origin.1.to_le_bytes());
        buf.extend_from_slice(&self.size.to_le_bytes());
        buf.extend_from_slice(&self.color.to_le_bytes());
        buf.extend_from_slice(&(self.blocks.len() as u32).to_le_bytes());
        for &(bx, by) in &self.blocks {
            buf.push(bx);
            buf.push(by);
        }
        buf
    }
}

fn header(width: u32, height: u32) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&width.to_le_bytes());
    buf.extend_from_slice(&height.to_le_bytes());
    buf
}
