// 正方形クロップのグリッド計算（I/Oなしの純粋な演算）

/// 1枚のクロップ領域の原点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileOrigin {
    pub x: u32,
    pub y: u32,
}

/// 画像を `size × size` の重なりのない正方形で敷き詰めるグリッド
///
/// タイルは行優先（上の行から、各行は左から右）で列挙される。
/// `size` に満たない右端・下端の余り領域はタイルにならず、切り捨てられる。
#[derive(Debug, Clone, Copy)]
pub struct CropGrid {
    width: u32,
    height: u32,
    size: u32,
}

impl CropGrid {
    /// 幅・高さ・クロップサイズからグリッドを作成
    ///
    /// `size` は 0 より大きいこと（CLI境界で検証済み）。
    pub fn new(width: u32, height: u32, size: u32) -> Self {
        debug_assert!(size > 0, "crop size must be positive");
        Self {
            width,
            height,
            size,
        }
    }

    /// 横方向のタイル数
    pub fn columns(&self) -> u32 {
        self.width / self.size
    }

    /// 縦方向のタイル数
    pub fn rows(&self) -> u32 {
        self.height / self.size
    }

    /// グリッド全体のタイル数 = floor(W/S) * floor(H/S)
    pub fn tile_count(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }

    /// タイル原点を行優先で列挙するイテレータを作成
    pub fn origins(&self) -> TileOrigins {
        TileOrigins {
            grid: *self,
            next_x: 0,
            next_y: 0,
        }
    }
}

/// `CropGrid` のタイル原点イテレータ
#[derive(Debug, Clone)]
pub struct TileOrigins {
    grid: CropGrid,
    next_x: u32,
    next_y: u32,
}

impl Iterator for TileOrigins {
    type Item = TileOrigin;

    fn next(&mut self) -> Option<TileOrigin> {
        let size = self.grid.size;

        // ループ境界が画像内アクセスを保証する:
        // origin + size <= width/height の間だけタイルを返す
        loop {
            if self.next_y + size > self.grid.height {
                return None;
            }
            if self.next_x + size > self.grid.width {
                // 行の終端に達したら次の行へ
                self.next_x = 0;
                self.next_y += size;
                continue;
            }

            let origin = TileOrigin {
                x: self.next_x,
                y: self.next_y,
            };
            self.next_x += size;
            return Some(origin);
        }
    }
}
