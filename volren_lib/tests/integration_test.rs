use volren_lib::{
    camera::TargetCamera,
    gpu::{ShaderId, TextureId, TextureSize, Uniform},
    ssao::SsaoKernel,
    test_helpers::{Call, RecordingDevice},
    volume::VolumeMetadata,
    DebugView, DisplayProperties, FrameState, GuiParameters, GuiUpdateFlags, Renderer,
    RendererConfig,
};

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 600;

fn renderer() -> Renderer<RecordingDevice> {
    let config = RendererConfig::builder()
        .resolution(WIDTH, HEIGHT)
        .build_unchecked();
    Renderer::with_kernel(
        RecordingDevice::new(),
        &config,
        &VolumeMetadata::new(64, 64, 64),
        SsaoKernel::with_seed(11),
    )
}

fn position(labels: &[String], label: &str) -> usize {
    labels.iter().position(|l| l == label).unwrap()
}

#[test]
fn ssao_runs_between_gbuffer_and_blur() {
    let mut renderer = renderer();
    let params = GuiParameters::default();
    let flags = GuiUpdateFlags::default();
    let display = DisplayProperties::default();
    let camera = TargetCamera::default();

    renderer.frame(&FrameState {
        params: &params,
        flags: &flags,
        display: &display,
        camera: &camera,
    });

    let labels = renderer.device().debug_groups();
    let gbuffer = position(&labels, "GBuffer");
    let ssao = position(&labels, "Ssao");
    let blur = position(&labels, "SsaoBlur");
    let composite = position(&labels, "Composite");
    assert!(gbuffer < ssao);
    assert!(ssao < blur);
    assert!(blur < composite);
}

#[test]
fn updaters_run_before_passes() {
    let mut renderer = renderer();
    let params = GuiParameters::default();
    let flags = GuiUpdateFlags::default();
    let display = DisplayProperties::default();
    let camera = TargetCamera::default();

    renderer.frame(&FrameState {
        params: &params,
        flags: &flags,
        display: &display,
        camera: &camera,
    });

    let calls = renderer.device().calls();
    let first_pass = calls
        .iter()
        .position(|c| matches!(c, Call::PushDebugGroup(_)))
        .unwrap();
    let noise = calls
        .iter()
        .position(|c| matches!(c, Call::UploadTexture { texture: TextureId::SsaoNoise, .. }))
        .unwrap();
    let tf = calls
        .iter()
        .position(|c| {
            matches!(
                c,
                Call::UploadTexture {
                    texture: TextureId::TransferFunction,
                    ..
                }
            )
        })
        .unwrap();
    assert!(noise < tf);
    assert!(tf < first_pass);
}

#[test]
fn steady_frames_do_not_reupload() {
    let mut renderer = renderer();
    let mut params = GuiParameters::default();
    let mut flags = GuiUpdateFlags::default();
    let display = DisplayProperties::default();
    let camera = TargetCamera::default();

    for _ in 0..3 {
        renderer.frame(&FrameState {
            params: &params,
            flags: &flags,
            display: &display,
            camera: &camera,
        });
    }
    assert_eq!(renderer.device().uploads_of(TextureId::SsaoNoise).len(), 1);
    assert_eq!(
        renderer.device().uploads_of(TextureId::TransferFunction).len(),
        1
    );

    // GUI drags a point
    params.transfer_function.add_point(0.25, 0.1);
    flags.mark_transfer_function_changed();
    renderer.frame(&FrameState {
        params: &params,
        flags: &flags,
        display: &display,
        camera: &camera,
    });
    assert_eq!(renderer.device().uploads_of(TextureId::SsaoNoise).len(), 1);
    assert_eq!(
        renderer.device().uploads_of(TextureId::TransferFunction),
        vec![(TextureSize::d1(512), 2048); 2]
    );
}

#[test]
fn ssao_parameter_change_reaches_shader() {
    let mut renderer = renderer();
    let mut params = GuiParameters::default();
    let mut flags = GuiUpdateFlags::default();
    let display = DisplayProperties::default();
    let camera = TargetCamera::default();

    renderer.frame(&FrameState {
        params: &params,
        flags: &flags,
        display: &display,
        camera: &camera,
    });

    params.ssao.kernel_size = 32;
    params.ssao.enabled = false;
    flags.mark_ssao_changed();
    renderer.device_mut().clear_calls();
    renderer.frame(&FrameState {
        params: &params,
        flags: &flags,
        display: &display,
        camera: &camera,
    });

    let device = renderer.device();
    assert_eq!(renderer.kernel().kernel_size(), 32);
    assert_eq!(
        device.uniform(ShaderId::Ssao, "kernelSize"),
        Some(Uniform::Int(32))
    );
    assert_eq!(
        device.uniform(ShaderId::SsaoFinal, "enableSsao"),
        Some(Uniform::Bool(false))
    );
}

#[test]
fn debug_view_draws_last() {
    let mut renderer = renderer();
    let params = GuiParameters {
        show_light_sources: true,
        ..Default::default()
    };
    let flags = GuiUpdateFlags::default();
    let display = DisplayProperties {
        debug_view: Some(DebugView::ShadowMap),
        ..Default::default()
    };
    let camera = TargetCamera::default();

    renderer.frame(&FrameState {
        params: &params,
        flags: &flags,
        display: &display,
        camera: &camera,
    });

    let labels = renderer.device().debug_groups();
    assert_eq!(labels.last().map(String::as_str), Some("Debug"));
    assert_eq!(labels.len(), 8);
}

#[test]
fn aspect_follows_resolution() {
    let mut renderer = renderer();
    renderer.set_resolution(400, 400);
    let params = GuiParameters::default();
    let flags = GuiUpdateFlags::default();
    let display = DisplayProperties::default();
    let camera = TargetCamera::default();

    renderer.frame(&FrameState {
        params: &params,
        flags: &flags,
        display: &display,
        camera: &camera,
    });

    assert!(renderer
        .device()
        .calls_in_group("GBuffer")
        .contains(&Call::SetViewport(400, 400)));
}
