use super::WorldCore;

/// Copy the color buffer into the transfer buffer with rows reversed, so a
/// top-left-origin canvas shows the bottom row at the bottom.
pub(super) fn extract_top_down(world: &mut WorldCore) -> *const u32 {
    let width = world.grid.width() as usize;
    let height = world.grid.height() as usize;
    let colors = world.grid.colors();

    if world.top_down_buffer.len() != colors.len() {
        world.top_down_buffer.resize(colors.len(), 0);
    }

    for (dst_row, src_row) in world
        .top_down_buffer
        .chunks_exact_mut(width)
        .zip(colors.chunks_exact(width).rev())
    {
        dst_row.copy_from_slice(src_row);
    }
    debug_assert_eq!(world.top_down_buffer.len(), width * height);

    world.top_down_buffer.as_ptr()
}
